use crate::commands::{CmdMessage, CmdResult};
use crate::config::SuratConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetPrefix(String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = SuratConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll | ConfigAction::ShowKey(_) => {}
        ConfigAction::SetPrefix(value) => {
            config.set_number_prefix(&value);
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "number-prefix set to {}",
                config.number_prefix()
            )));
        }
    }

    Ok(result.with_config(config))
}
