use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if *edit_config {
            ConfigLogic::edit(&Config::config_file(), editor.as_deref())?;
        }

        if !*print_config && !*edit_config {
            info(format!(
                "Configuration file: {} (use --print or --edit)",
                Config::config_file().display()
            ));
        }
    }

    Ok(())
}
