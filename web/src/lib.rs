use clap::{Parser, ValueEnum};
use wasm_bindgen::prelude::*;

mod canvas;
mod flood;
mod tictactoe;
mod utils;

#[derive(Copy, Clone, Debug, Default, PartialEq, ValueEnum)]
enum GameKind {
    /// Flood-fill color puzzle
    #[default]
    Flood,
    /// Tic-tac-toe for two players
    Tictactoe,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Which game to show
    #[arg(short, long, value_enum, default_value_t)]
    game: GameKind,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    /// Reads arguments from the URL fragment, e.g. `#--game=tictactoe&-vv`.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, parse_error) = match Args::from_location_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from([""]), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        if let Err(err) = console_log::init_with_level(log_level) {
            web_sys::console::error_1(&format!("Error initializing logger: {}", err).into());
        }
    }
    if let Some(err) = parse_error {
        log::warn!("ignoring URL arguments {:?}: {}", location_hash, err);
    }
    log::debug!("args: {:?}", args);

    let Some(root) = document().get_element_by_id("game") else {
        log::error!("Could not find id=\"game\" element");
        return;
    };

    log::debug!("App started");
    match args.game {
        GameKind::Flood => {
            let props = flood::FloodProps { seed: args.seed };
            yew::Renderer::<flood::FloodView>::with_root_and_props(root, props).render();
        }
        GameKind::Tictactoe => {
            yew::Renderer::<tictactoe::TicTacToeView>::with_root(root).render();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_location_hash("").unwrap();

        assert_eq!(args.game, GameKind::Flood);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn hash_selects_game_and_seed() {
        let args = Args::from_location_hash("#--game=tictactoe&--seed=42").unwrap();

        assert_eq!(args.game, GameKind::Tictactoe);
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn hash_controls_verbosity() {
        let quiet = Args::from_location_hash("#-q").unwrap();
        let loud = Args::from_location_hash("#-vv").unwrap();

        assert!(quiet.verbose.log_level() < loud.verbose.log_level());
    }

    #[test]
    fn unknown_game_is_rejected() {
        assert!(Args::from_location_hash("#--game=chess").is_err());
    }
}
