//! Command line and environment handling for run-lua

use exlaunch_core::{ConsoleConfig, ExlaunchError, Result};

/// Usage line shown when no command is given
pub const USAGE: &str = "usage: run-lua <command>";

/// What `main` should do for a given argv and environment
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    /// Console address not configured: print the message and exit cleanly
    Unconfigured(String),
    /// No command given
    Usage,
    /// Send `command` to the console described by `config`
    Send {
        config: ConsoleConfig,
        command: String,
    },
}

/// Decide what to do from `args` (including the program name) and `lookup`.
///
/// The console address is checked before the arguments, so a missing `IP`
/// always ends in the controlled exit.
pub fn plan<F>(args: &[String], lookup: F) -> Result<Invocation>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match ConsoleConfig::from_lookup(lookup) {
        Ok(config) => config,
        Err(e @ ExlaunchError::MissingEnv(_)) => {
            return Ok(Invocation::Unconfigured(e.to_string()));
        }
        Err(e) => return Err(e),
    };

    Ok(match args.get(1) {
        Some(command) => Invocation::Send {
            config,
            command: command.clone(),
        },
        None => Invocation::Usage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn ip(value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |name| (name == "IP").then(|| value.to_string())
    }

    #[test]
    fn test_send_with_ip_and_command() {
        let result = plan(
            &args(&["run-lua", "Game.ForceConfirmSave()"]),
            ip("10.0.0.7"),
        )
        .unwrap();

        assert_eq!(
            result,
            Invocation::Send {
                config: ConsoleConfig::new("10.0.0.7"),
                command: "Game.ForceConfirmSave()".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_ip_is_unconfigured() {
        let result = plan(&args(&["run-lua", "print(1)"]), |_| None).unwrap();
        assert_eq!(result, Invocation::Unconfigured("IP is empty!".to_string()));
    }

    #[test]
    fn test_empty_ip_is_unconfigured() {
        let result = plan(&args(&["run-lua", "print(1)"]), ip("")).unwrap();
        assert_eq!(result, Invocation::Unconfigured("IP is empty!".to_string()));
    }

    #[test]
    fn test_missing_command_is_usage() {
        let result = plan(&args(&["run-lua"]), ip("10.0.0.7")).unwrap();
        assert_eq!(result, Invocation::Usage);
    }

    #[test]
    fn test_missing_ip_wins_over_missing_command() {
        let result = plan(&args(&["run-lua"]), |_| None).unwrap();
        assert_eq!(result, Invocation::Unconfigured("IP is empty!".to_string()));
    }
}
