use crate::errors::AppResult;
use crate::script::decompile;
use clap::Args;

/// Print the decompiled instructions of a script
#[derive(Args)]
pub struct ScriptCommand {
    /// Script hex
    pub hex: String,
}

impl ScriptCommand {
    pub fn run(&self) -> AppResult<()> {
        print!("{}", self.execute()?);
        Ok(())
    }

    /// One instruction per line; a decompile failure is reported as the last line
    pub fn execute(&self) -> AppResult<String> {
        let script = hex::decode(self.hex.trim())?;
        let mut output = String::new();

        for instruction in decompile(&script) {
            match instruction {
                Ok(instruction) => output.push_str(&format!("{}\n", instruction)),
                Err(e) => output.push_str(&format!("error: {}\n", e)),
            }
        }

        Ok(output)
    }
}
