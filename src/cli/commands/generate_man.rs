//! Generate man page command

use crate::cli::exit_codes;
use crate::cli::Cli;
use crate::error::{CodeDoctorError, ReportError};
use clap::CommandFactory;
use std::fs;

use super::GenerateManArgs;

/// Render `codedoctor.1` into the output directory
pub async fn execute(args: GenerateManArgs) -> Result<i32, CodeDoctorError> {
    let man = clap_mangen::Man::new(Cli::command());
    let output_path = args.output.join("codedoctor.1");

    let mut buffer: Vec<u8> = Vec::new();
    let write_err = |source| ReportError::FileWrite {
        path: output_path.display().to_string(),
        source,
    };
    man.render(&mut buffer).map_err(write_err)?;
    fs::write(&output_path, buffer).map_err(write_err)?;

    println!("Man page generated: {}", output_path.display());

    Ok(exit_codes::SUCCESS)
}
