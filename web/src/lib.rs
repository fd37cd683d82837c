use clap::{Parser, ValueEnum};
use wasm_bindgen::prelude::*;
use yew::prelude::*;

pub use error::WiringError;
pub use game::GameProps;

mod counter;
mod error;
mod game;

/// Which widgets the page shows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Widget {
    Counter,
    Game,
    #[default]
    Both,
}

impl Widget {
    pub const fn shows_counter(self) -> bool {
        matches!(self, Self::Counter | Self::Both)
    }

    pub const fn shows_game(self) -> bool {
        matches!(self, Self::Game | Self::Both)
    }
}

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Which widgets to mount
    #[arg(long, value_enum, default_value_t)]
    widget: Widget,

    #[command(flatten)]
    game: GameProps,
}

/// Parses `#-v&--widget=game` style location hashes as command-line flags.
fn parse_hash(hash: &str) -> Result<Args, clap::Error> {
    let flags = hash.split(['#', '&']).filter(|flag| !flag.is_empty());
    Args::try_parse_from(std::iter::once("tallytoe").chain(flags))
}

#[derive(Properties, Clone, Debug, Default, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub widget: Widget,
    #[prop_or_default]
    pub game: GameProps,
}

impl From<Args> for AppProps {
    fn from(args: Args) -> Self {
        Self {
            widget: args.widget,
            game: args.game,
        }
    }
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    let AppProps { widget, game } = props.clone();

    html! {
        <main class="tallytoe">
            if widget.shows_counter() {
                <counter::CounterProvider>
                    <counter::CounterView/>
                </counter::CounterProvider>
            }
            if widget.shows_game() {
                <game::GameView descending={game.descending}/>
            }
        </main>
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

    let (args, hash_error) = match parse_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::default(), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = hash_error {
        log::warn!("ignoring location hash {:?}: {}", location_hash, err);
    }
    log::debug!("args: {:?}", args);

    let Some(root) = document().get_element_by_id("app") else {
        log::error!("Could not find id=\"app\" element, nothing mounted");
        return;
    };

    log::debug!("App started");
    yew::Renderer::<App>::with_root_and_props(root, args.into()).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        for hash in ["", "#"] {
            let args = parse_hash(hash).unwrap();

            assert_eq!(args.widget, Widget::Both);
            assert!(!args.game.descending);
            assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
        }
    }

    #[test]
    fn hash_flags_are_parsed_like_command_line() {
        let args = parse_hash("#-vv&--widget=game&--descending").unwrap();

        assert_eq!(args.widget, Widget::Game);
        assert!(args.game.descending);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
        assert!(!args.widget.shows_counter());
    }

    #[test]
    fn unknown_widget_is_rejected() {
        assert!(parse_hash("#--widget=clock").is_err());
    }

    #[test]
    fn quiet_flag_disables_logging() {
        let args = parse_hash("#-q").unwrap();

        assert_eq!(args.verbose.log_level(), None);
    }

    #[test]
    fn app_props_take_widget_and_game_flags() {
        let props = AppProps::from(parse_hash("#--widget=counter").unwrap());

        assert_eq!(
            props,
            AppProps {
                widget: Widget::Counter,
                game: GameProps::default(),
            }
        );
        assert!(props.widget.shows_counter());
        assert!(!props.widget.shows_game());
    }
}
