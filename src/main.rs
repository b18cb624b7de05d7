use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rs_mtm_kinematics::joint_limits::compliant;
use rs_mtm_kinematics::kinematic_traits::{Kinematics, JOINTS_AT_ZERO};
use rs_mtm_kinematics::kinematics_impl::MtmKinematics;
use rs_mtm_kinematics::manipulator::Manipulator;
use rs_mtm_kinematics::parameters_from_file::ManipulatorConfig;
use rs_mtm_kinematics::utils::{dump_joints, dump_pose};

/// Forward and inverse kinematics of the MTM arm.
#[derive(Parser, Debug)]
#[command(name = "mtm-ik", version, about)]
struct Args {
    /// YAML model file. The built-in MTM model is used if not given.
    #[arg(long)]
    model: Option<PathBuf>,

    /// Joint positions in degrees, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    joints: Option<Vec<f64>>,

    /// Print the model as YAML and exit
    #[arg(long)]
    dump_model: bool,
}

/// Usage example.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let (manipulator, robot): (Manipulator, Arc<dyn Kinematics>) = match &args.model {
        Some(path) => {
            let config = ManipulatorConfig::from_yaml_file(path)
                .with_context(|| format!("Failed to read model {}", path.display()))?;
            (config.manipulator.clone(), config.to_robot())
        }
        None => {
            let manipulator = Manipulator::mtm();
            (manipulator.clone(), Arc::new(MtmKinematics::new(manipulator)))
        }
    };

    if args.dump_model {
        print!("{}", manipulator.to_yaml());
        return Ok(());
    }

    let joints: Vec<f64> = match args.joints {
        Some(degrees) => degrees.iter().map(|d| d.to_radians()).collect(),
        None => JOINTS_AT_ZERO.to_vec(),
    };
    if joints.len() != robot.dof() {
        bail!("Expected {} joint values, got {}", robot.dof(), joints.len());
    }

    println!("Joints:");
    dump_joints(&joints);

    let pose = robot.forward(&joints);
    println!("Forward kinematics:");
    dump_pose(&pose);

    // Solve back, continuing from the same joints
    let mut solved = joints.clone();
    let outcome = robot.inverse(&pose, &mut solved);
    println!("Inverse kinematics:");
    dump_joints(&solved);
    match outcome {
        Ok(()) => println!("Outcome: success"),
        Err(e) => println!("Outcome: failure, {}", e),
    }

    println!("Within joint limits: {}", compliant(&manipulator.joint_limits(), &solved));

    println!("Reached pose:");
    dump_pose(&robot.forward(&solved));
    Ok(())
}
