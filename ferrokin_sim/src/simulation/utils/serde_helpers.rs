// ferrokin_sim/src/simulation/utils/serde_helpers.rs

//! `#[serde(with = ...)]` adapters between scenario-file arrays and nalgebra types.

/// `[x, y, z]` <-> `Vector3<f64>`.
pub mod vec3_from_array {
    use nalgebra::Vector3;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(vec: &Vector3<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq([vec.x, vec.y, vec.z].iter())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vector3<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let arr: [f64; 3] = Deserialize::deserialize(deserializer)?;
        Ok(Vector3::from(arr))
    }
}

/// `[roll, pitch, yaw]` in degrees <-> `UnitQuaternion<f64>`.
pub mod quat_from_euler_deg {
    use nalgebra::UnitQuaternion;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(quat: &UnitQuaternion<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let (roll, pitch, yaw) = quat.euler_angles();
        serializer.collect_seq([roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees()].iter())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<UnitQuaternion<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let [roll, pitch, yaw]: [f64; 3] = Deserialize::deserialize(deserializer)?;
        Ok(UnitQuaternion::from_euler_angles(
            roll.to_radians(),
            pitch.to_radians(),
            yaw.to_radians(),
        ))
    }
}
