use clap::Args;
use serde::{Deserialize, Serialize};
use tallytoe_core as game;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
enum Banner {
    Winner(game::Mark),
    Draw,
}

impl Banner {
    fn of(history: &game::GameHistory) -> Option<Self> {
        match history.state() {
            game::GameState::InProgress => None,
            game::GameState::Won(mark) => Some(Self::Winner(mark)),
            game::GameState::Draw => Some(Self::Draw),
        }
    }

    const fn class(&self) -> &'static str {
        match self {
            Self::Winner(_) => "winner",
            Self::Draw => "draw",
        }
    }

    fn text(&self) -> String {
        match self {
            Self::Winner(mark) => format!("Winner: {}", mark),
            Self::Draw => "Draw! No one wins.".to_string(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct MoveDetail {
    player: game::Mark,
    coords: game::Coord2,
}

/// One line of the move list.
#[derive(Clone, Debug, PartialEq)]
struct MoveEntry {
    step: game::Step,
    current: bool,
    title: String,
    detail: Option<MoveDetail>,
}

fn move_entries(history: &game::GameHistory, order: game::HistoryOrder) -> Vec<MoveEntry> {
    let entries = history
        .records()
        .iter()
        .enumerate()
        .map(|(step, record)| {
            let current = history.is_current(step);
            let title = if record.is_initial() {
                "Game Start".to_string()
            } else if current {
                format!("You are at move #{}", step)
            } else {
                format!("Move {}", step)
            };
            let detail = record
                .location()
                .zip(record.player())
                .map(|(location, player)| MoveDetail {
                    player,
                    coords: location.to_coords(),
                });
            MoveEntry {
                step,
                current,
                title,
                detail,
            }
        })
        .collect();
    order.arrange(entries)
}

const fn order_label(order: game::HistoryOrder) -> &'static str {
    if order.is_ascending() { "Asc" } else { "Desc" }
}

/// `playable` until the current board is won or drawn.
const fn board_class(state: game::GameState) -> &'static str {
    if state.is_finished() { "finished" } else { "playable" }
}

const fn mark_class(mark: game::Mark) -> &'static str {
    match mark {
        game::Mark::X => "x",
        game::Mark::O => "o",
    }
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl HasUpdate for game::Result<game::PlayOutcome> {
    fn has_update(self) -> bool {
        self.inspect_err(|err| log::error!("play rejected: {}", err))
            .is_ok_and(game::PlayOutcome::has_update)
    }
}

impl HasUpdate for game::Result<game::JumpOutcome> {
    fn has_update(self) -> bool {
        self.inspect_err(|err| log::error!("jump rejected: {}", err))
            .is_ok_and(game::JumpOutcome::has_update)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Msg {
    Play(game::CellIndex),
    JumpTo(game::Step),
    Reset,
    ToggleOrder,
}

#[derive(Properties, Clone, PartialEq)]
struct SquareProps {
    index: game::CellIndex,
    cell: game::Cell,
    #[prop_or_default]
    highlight: bool,
    callback: Callback<game::CellIndex>,
}

#[function_component(SquareView)]
fn square_component(props: &SquareProps) -> Html {
    let SquareProps {
        index,
        cell,
        highlight,
        callback,
    } = props.clone();

    let class = classes!(
        "square",
        cell.mark().map(mark_class),
        highlight.then_some("highlight")
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("square {} clicked", index);
        callback.emit(index);
    });

    html! {
        <button {class} {onclick} data-index={index.to_string()}>
            {cell.mark().map_or("", game::Mark::symbol)}
        </button>
    }
}

#[derive(Args, Properties, Debug, Clone, Default, PartialEq)]
pub struct GameProps {
    /// Start with the move list in descending order
    #[arg(long)]
    #[prop_or_default]
    pub descending: bool,
}

#[derive(Debug)]
pub(crate) struct GameView {
    history: game::GameHistory,
    order: game::HistoryOrder,
    current_entry: NodeRef,
    scroll_pending: bool,
}

impl GameView {
    fn play(&mut self, index: game::CellIndex) -> bool {
        let mark = self.history.next_mark();
        let updated = self.history.play(index).has_update();
        if updated {
            log::debug!("{} played {}: {:?}", mark, index, self.history.state());
        } else {
            log::trace!("play at {} ignored", index);
        }
        updated
    }

    fn jump_to(&mut self, step: game::Step) -> bool {
        let updated = self.history.jump_to(step).has_update();
        if updated {
            log::debug!("jumped to step {}", step);
        }
        updated
    }

    fn scroll_to_current_entry(&self) {
        let Some(entry) = self.current_entry.cast::<web_sys::Element>() else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_block(ScrollLogicalPosition::Nearest);
        options.set_behavior(ScrollBehavior::Smooth);
        entry.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn view_banner(&self) -> Html {
        match Banner::of(&self.history) {
            Some(banner) => html! {
                <span class={classes!("banner", banner.class())}>{banner.text()}</span>
            },
            None => html! {},
        }
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let board = self.history.board();
        let winner = self.history.winner();
        let callback = ctx.link().callback(Msg::Play);
        let state = board_class(self.history.state());

        html! {
            <div class={classes!("board", state)}>
                {
                    for (0..game::BOARD_SIZE).map(|row| html! {
                        <div class="board-row" key={row.to_string()}>
                            {
                                for (0..game::BOARD_SIZE).map(|col| {
                                    let index = game::coords_to_index((row, col));
                                    let cell = board[index];
                                    let highlight = winner.is_some_and(|line| line.contains(index));
                                    let callback = callback.clone();
                                    html! {
                                        <SquareView key={index.to_string()} {index} {cell} {highlight} {callback}/>
                                    }
                                })
                            }
                        </div>
                    })
                }
            </div>
        }
    }

    fn view_move_entry(&self, ctx: &Context<Self>, entry: MoveEntry) -> Html {
        let MoveEntry {
            step,
            current,
            title,
            detail,
        } = entry;

        let class = classes!("move", current.then_some("current"));
        let onclick = (!current).then(|| ctx.link().callback(move |_: MouseEvent| Msg::JumpTo(step)));
        let node_ref = if current {
            self.current_entry.clone()
        } else {
            NodeRef::default()
        };

        html! {
            <li key={step.to_string()} {class} {onclick} ref={node_ref}>
                <div class="title">
                    <span>{title}</span>
                    if !current && step > 0 {
                        <button class="goto">{"Go to"}</button>
                    }
                </div>
                if let Some(MoveDetail { player, coords: (row, col) }) = detail {
                    <div class={classes!("player", mark_class(player))}>
                        {format!("Player: {}", player)}
                    </div>
                    <div class="location">{format!("Location: ({}, {})", row, col)}</div>
                }
            </li>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let order = if ctx.props().descending {
            game::HistoryOrder::Descending
        } else {
            game::HistoryOrder::Ascending
        };

        Self {
            history: game::GameHistory::new(),
            order,
            current_entry: NodeRef::default(),
            scroll_pending: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let (updated, moved) = match msg {
            Play(index) => {
                let updated = self.play(index);
                (updated, updated)
            }
            JumpTo(step) => {
                let updated = self.jump_to(step);
                (updated, updated)
            }
            Reset => {
                log::debug!("reset game");
                (self.history.reset(), false)
            }
            ToggleOrder => {
                self.order.toggle();
                log::debug!("history order: {:?}", self.order);
                (true, false)
            }
        };

        self.scroll_pending |= moved;
        updated
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if std::mem::take(&mut self.scroll_pending) {
            self.scroll_to_current_entry();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let cb_reset = ctx.link().callback(|_: MouseEvent| Reset);
        let cb_toggle_order = ctx.link().callback(|_: MouseEvent| ToggleOrder);
        let entries = move_entries(&self.history, self.order);

        html! {
            <section class="tictactoe">
                <h1>{"Tic Tac Toe"}</h1>
                <header>
                    <span class="step">{format!("You are at move #{}", self.history.step())}</span>
                    {self.view_banner()}
                </header>
                <div class="play-area">
                    <div class="board-panel">
                        {self.view_board(ctx)}
                        <nav>
                            <button class="reset" onclick={cb_reset}>{"Reset"}</button>
                            <button class="order" onclick={cb_toggle_order}>{order_label(self.order)}</button>
                        </nav>
                    </div>
                    <aside class="move-history">
                        <h2>{"Move History"}</h2>
                        <ol>
                            { for entries.into_iter().map(|entry| self.view_move_entry(ctx, entry)) }
                        </ol>
                    </aside>
                </div>
            </section>
        }
    }
}
