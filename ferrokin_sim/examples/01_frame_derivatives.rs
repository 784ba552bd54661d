// ferrokin_sim/examples/01_frame_derivatives.rs

//! Computes the derivatives of a tool frame's velocity and acceleration on
//! the bundled spatial arm scenario and prints them in every convention.
//!
//! To run this example:
//! `cargo run --example 01_frame_derivatives`

use std::path::Path;

use ferrokin_sim::prelude::*;
use nalgebra::DVector;

fn main() -> Result<(), SimError> {
    ferrokin_sim::init_tracing(false);

    let scenario = Path::new(env!("CARGO_MANIFEST_DIR")).join("../assets/scenarios/spatial_arm.toml");
    let config = load_scenario(&scenario)?;
    let model = build_model(&config.model)?;
    let tool = model.frame_id("tool")?;

    let q = DVector::from_element(model.nq, 0.3);
    let v = DVector::from_element(model.nv, 0.5);
    let a = DVector::from_element(model.nv, -0.2);
    let mut data = Data::new(&model);
    forward_kinematics(&model, &mut data, &q, &v, &a)?;

    for rf in ReferenceFrame::ALL {
        let zeros = || Matrix6x::zeros(model.nv);
        let (mut v_dq, mut a_dq, mut a_dv, mut a_da) = (zeros(), zeros(), zeros(), zeros());
        frame_acceleration_derivatives_by_frame(
            &model,
            &data,
            tool,
            rf,
            AccelerationPartials::new(&mut v_dq, &mut a_dq, &mut a_dv, &mut a_da),
        )?;
        println!("--- {} ---", rf);
        println!("dv/dq:{}", v_dq);
        println!("da/dq:{}", a_dq);
    }
    Ok(())
}
