use tracing::debug;

use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::switcher::Switcher;
use crate::core::traits::env_store::EnvStore;
use crate::core::traits::prompter::Prompter;

const SHOW_CURRENT: &str = "Show current environment";
const CHANGE: &str = "Change environment";

/// Execute `uu-env` with no arguments.
///
/// Asks whether to show or change the environment, then for the change
/// case asks which one. Every environment is offered, the active one too.
pub fn execute<S: EnvStore, P: Prompter>(switcher: &Switcher<S>, prompter: &mut P) -> Result<()> {
    let actions = [SHOW_CURRENT.to_string(), CHANGE.to_string()];
    let action = prompter.select("What do you want to do?", &actions)?;
    debug!(?action, "menu answer");

    match action.as_deref() {
        Some(SHOW_CURRENT) => {
            println!();
            super::show::execute(switcher)
        }
        Some(CHANGE) => change(switcher, prompter),
        _ => {
            println!("\n  Can't help you, sorry.");
            Ok(())
        }
    }
}

fn change<S: EnvStore, P: Prompter>(switcher: &Switcher<S>, prompter: &mut P) -> Result<()> {
    let names = switcher.list()?;
    if names.is_empty() {
        println!();
        output::warning("No environments available.");
        return Ok(());
    }

    match prompter.select("Which one?", &names)? {
        Some(name) => {
            println!();
            super::change::execute(switcher, &name)
        }
        None => {
            println!("\n  Can't help you, sorry.");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::env_stores::file_env_store::FileEnvStore;
    use crate::config::app_config::AppConfig;

    /// Replays canned answers and records every question asked.
    struct Scripted {
        answers: Vec<Option<String>>,
        asked: Vec<(String, Vec<String>)>,
    }

    impl Scripted {
        fn new(answers: &[Option<&str>]) -> Self {
            Self {
                answers: answers.iter().rev().map(|a| a.map(String::from)).collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for Scripted {
        fn select(&mut self, message: &str, choices: &[String]) -> Result<Option<String>> {
            self.asked.push((message.to_string(), choices.to_vec()));
            Ok(self.answers.pop().flatten())
        }
    }

    fn scenario() -> (tempfile::TempDir, AppConfig) {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_base(dir.path().to_path_buf());
        std::fs::create_dir_all(&config.env_dir).unwrap();
        std::fs::write(config.env_file("dev"), "HOST=dev.local").unwrap();
        std::fs::write(config.env_file("prod"), "HOST=prod.local").unwrap();
        std::fs::write(&config.active_file, "HOST=dev.local").unwrap();
        (dir, config)
    }

    #[test]
    fn change_offers_all_envs_including_active() {
        let (_dir, config) = scenario();
        let switcher = Switcher {
            store: FileEnvStore::new(&config),
        };
        let mut prompter = Scripted::new(&[Some(CHANGE), Some("prod")]);

        execute(&switcher, &mut prompter).unwrap();

        assert_eq!(prompter.asked.len(), 2);
        assert_eq!(prompter.asked[1].1, vec!["dev", "prod"]);
        assert_eq!(
            std::fs::read_to_string(&config.active_file).unwrap(),
            "HOST=prod.local"
        );
    }

    #[test]
    fn show_asks_only_once() {
        let (_dir, config) = scenario();
        let switcher = Switcher {
            store: FileEnvStore::new(&config),
        };
        let mut prompter = Scripted::new(&[Some(SHOW_CURRENT)]);

        execute(&switcher, &mut prompter).unwrap();

        assert_eq!(prompter.asked.len(), 1);
    }

    #[test]
    fn unrecognized_action_does_nothing() {
        let (_dir, config) = scenario();
        let switcher = Switcher {
            store: FileEnvStore::new(&config),
        };
        let mut prompter = Scripted::new(&[None]);

        execute(&switcher, &mut prompter).unwrap();

        assert_eq!(prompter.asked.len(), 1);
        assert_eq!(
            std::fs::read_to_string(&config.active_file).unwrap(),
            "HOST=dev.local"
        );
    }

    #[test]
    fn no_environments_skips_second_question() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_base(dir.path().to_path_buf());
        std::fs::create_dir_all(&config.env_dir).unwrap();
        let switcher = Switcher {
            store: FileEnvStore::new(&config),
        };
        let mut prompter = Scripted::new(&[Some(CHANGE)]);

        execute(&switcher, &mut prompter).unwrap();

        assert_eq!(prompter.asked.len(), 1);
    }
}
