use clap::Parser;
use mazetrace_core::{Algorithm, MazeSize};
use mazetrace_gateway::DEFAULT_SERVER_URL;
use mazetrace_replay::Cadence;

use crate::state::Settings;

/// Command line options for one run of the client.
///
/// Size, algorithm and cadence override the persisted settings.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Config {
    /// Base URL of the solver service.
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    pub server: String,
    /// Generate and solve in-process instead of calling the service.
    #[arg(long)]
    pub offline: bool,
    /// Maze side length (5-30).
    #[arg(long, value_parser = parse_size)]
    pub size: Option<MazeSize>,
    /// Search algorithm (`bfs` or `dfs`).
    #[arg(long)]
    pub algorithm: Option<Algorithm>,
    /// Milliseconds between replay steps (10-200).
    #[arg(long, value_parser = parse_cadence)]
    pub cadence: Option<Cadence>,
}

impl Config {
    pub(crate) fn apply_to(&self, settings: &mut Settings) {
        if let Some(size) = self.size {
            settings.maze_size = size;
        }
        if let Some(algorithm) = self.algorithm {
            settings.algorithm = algorithm;
        }
        if let Some(cadence) = self.cadence {
            settings.cadence = cadence;
        }
    }
}

fn parse_size(s: &str) -> Result<MazeSize, String> {
    let value = s.parse::<u8>().map_err(|err| err.to_string())?;
    MazeSize::new(value).map_err(|err| err.to_string())
}

fn parse_cadence(s: &str) -> Result<Cadence, String> {
    let value = s.parse::<u16>().map_err(|err| err.to_string())?;
    Cadence::new(value).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;
    use mazetrace_core::{Algorithm, MazeSize};
    use mazetrace_gateway::DEFAULT_SERVER_URL;
    use mazetrace_replay::Cadence;

    use super::Config;
    use crate::state::Settings;

    #[test]
    fn defaults_keep_persisted_settings() {
        let config = Config::try_parse_from(["mazetrace"]).unwrap();
        assert_eq!(config.server, DEFAULT_SERVER_URL);
        assert!(!config.offline);

        let mut settings = Settings {
            maze_size: MazeSize::new(20).unwrap(),
            algorithm: Algorithm::Dfs,
            cadence: Cadence::new(120).unwrap(),
        };
        let before = settings.clone();
        config.apply_to(&mut settings);
        assert_eq!(settings, before);
    }

    #[test]
    fn overrides_replace_settings() {
        let config = Config::try_parse_from([
            "mazetrace",
            "--offline",
            "--size",
            "7",
            "--algorithm",
            "dfs",
            "--cadence",
            "10",
        ])
        .unwrap();
        assert!(config.offline);

        let mut settings = Settings::default();
        config.apply_to(&mut settings);
        assert_eq!(settings.maze_size.get(), 7);
        assert_eq!(settings.algorithm, Algorithm::Dfs);
        assert_eq!(settings.cadence.millis(), 10);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(Config::try_parse_from(["mazetrace", "--size", "31"]).is_err());
        assert!(Config::try_parse_from(["mazetrace", "--cadence", "5"]).is_err());
        assert!(Config::try_parse_from(["mazetrace", "--algorithm", "astar"]).is_err());
    }
}
