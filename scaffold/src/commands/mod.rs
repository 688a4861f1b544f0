use clap::Parser;
use eyre::{Context, Result};
use scaffold_core::ClassName;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

/// Extension trait for exiting on scaffold errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for scaffold_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "scaffold-test")]
#[command(version)]
#[command(about = "Create a SubTest skeleton for a class and include it from the class source")]
pub(crate) struct Cli {
    /// Name of the class to test (e.g. `MyClass` -> test/test_MyClass.cpp, myClass.cpp)
    #[arg(value_name = "CLASS_NAME")]
    pub class_name: ClassName,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let working_dir = std::env::current_dir().wrap_err("Failed to get current directory")?;

        let report = ops::scaffold(ops::scaffold::ScaffoldOptions {
            working_dir: &working_dir,
            class_name: &self.class_name,
        })
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
