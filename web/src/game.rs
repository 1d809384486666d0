use crate::utils::*;
use clap::Args;
use gloo::storage::errors::StorageError;
use gloo::timers::callback::Timeout;
use memoria_core as game;
use serde::{Deserialize, Serialize};
use yew::html::Scope;
use yew::prelude::*;

/// Best score as kept in local storage.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct BestScore(game::AttemptCount);

impl StorageKey for BestScore {
    const KEY: &'static str = "memoria:best-score";
}

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct LocalScoreStore;

impl game::BestScoreStore for LocalScoreStore {
    type Error = StorageError;

    fn load_best(&self) -> Result<Option<game::AttemptCount>, StorageError> {
        Ok(BestScore::local_load()?.map(|BestScore(best)| best))
    }

    fn save_best(&mut self, attempts: game::AttemptCount) -> Result<(), StorageError> {
        BestScore(attempts).local_save()
    }
}

/// Arms a browser timeout per revert, posting the ticket back to the view when it fires.
pub(crate) struct TimeoutScheduler {
    link: Scope<GameView>,
}

impl game::RevertScheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&mut self, revert: game::PendingRevert) -> Timeout {
        let link = self.link.clone();
        let ticket = revert.ticket;
        let millis = u32::try_from(revert.delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || link.send_message(Msg::RevertDue(ticket)))
    }

    fn cancel(&mut self, handle: Timeout) {
        // dropping clears the browser timeout
        drop(handle);
    }
}

type Session = game::GameSession<LocalScoreStore, TimeoutScheduler>;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Select(game::Position),
    RevertDue(game::RevertTicket),
    NewGame,
}

fn format_best(best: Option<game::AttemptCount>) -> String {
    best.map_or_else(|| "-".to_string(), |best| best.to_string())
}

fn card_classes(state: game::CardState, identity: Option<&game::CardIdentity>) -> Classes {
    use game::CardState::*;

    let mut class = classes!(
        "card",
        match state {
            Hidden => classes!(),
            Revealed => classes!("open"),
            Matched => classes!("open", "matched"),
        }
    );
    if let Some(identity) = identity {
        class.push(identity.to_string());
    }
    class
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    position: game::Position,
    state: game::CardState,
    #[prop_or_default]
    identity: Option<game::CardIdentity>,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::Position>,
}

#[function_component(CardView)]
fn card_component(props: &CardProps) -> Html {
    let CardProps {
        position,
        state,
        identity,
        locked,
        callback,
    } = props.clone();

    let mut class = card_classes(state, identity.as_ref());
    if locked {
        class.push("locked");
    }
    let style = identity.map(|identity| format!("background-color: {}", identity));

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("card {} clicked", position);
        callback.emit(position);
    });

    html! {
        <div {class} {style} {onclick}/>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    #[prop_or_default]
    seed: Option<String>,
}

pub(crate) struct GameView {
    session: Session,
}

impl GameView {
    fn initial_seed(props: &GameProps) -> u64 {
        match props.seed.as_deref() {
            None => js_random_seed(),
            Some(raw) => parse_seed(raw).unwrap_or_else(|| {
                log::warn!("Ignoring unparsable seed {:?}", raw);
                js_random_seed()
            }),
        }
    }

    fn board_state_class(&self) -> &'static str {
        let engine = self.session.engine();
        if engine.is_won() {
            "won"
        } else if engine.is_locked() {
            "locked"
        } else {
            "playing"
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = GameView::initial_seed(ctx.props());
        log::debug!("seed: {:#018x}", seed);

        let engine =
            game::MatchEngine::new(game::DeckConfig::classic(), game::RandomShuffler::new(seed));
        let scheduler = TimeoutScheduler {
            link: ctx.link().clone(),
        };
        Self {
            session: game::GameSession::new(engine, LocalScoreStore, scheduler),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Select(position) => match self.session.select_card(position) {
                Ok(outcome) => outcome.has_update(),
                Err(err) => {
                    log::error!("Could not select card {}: {}", position, err);
                    false
                }
            },
            RevertDue(ticket) => self.session.fire_revert(ticket).has_update(),
            NewGame => {
                log::debug!("new game");
                self.session.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let engine = self.session.engine();
        let stats = engine.stats();
        let locked = engine.is_locked();
        let board_class = classes!("board", self.board_state_class());

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        html! {
            <div class="memoria">
                <nav>
                    <aside>{"Score: "}<span id="score">{stats.attempts.to_string()}</span></aside>
                    <span><button onclick={cb_new_game}>{"Restart"}</button></span>
                    <aside>{"Best Score: "}<span id="bestScore">{format_best(stats.best_attempts)}</span></aside>
                </nav>
                if engine.is_won() {
                    <h1 id="winner">{"YOU WIN"}</h1>
                }
                <div class={board_class}>
                    {
                        for engine.cards().iter().map(|card| {
                            let callback = ctx.link().callback(Msg::Select);
                            html! {
                                <CardView
                                    position={card.position}
                                    state={card.state}
                                    identity={card.visible_identity().cloned()}
                                    {locked}
                                    {callback}
                                />
                            }
                        })
                    }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_score_shows_dash_until_set() {
        assert_eq!(format_best(None), "-");
        assert_eq!(format_best(Some(0)), "0");
        assert_eq!(format_best(Some(14)), "14");
    }

    #[test]
    fn card_classes_follow_card_state() {
        let red = game::CardIdentity::from_static("red");

        let hidden = card_classes(game::CardState::Hidden, None);
        assert!(hidden.contains("card"));
        assert!(!hidden.contains("open"));

        let revealed = card_classes(game::CardState::Revealed, Some(&red));
        assert!(revealed.contains("open"));
        assert!(revealed.contains("red"));
        assert!(!revealed.contains("matched"));

        let matched = card_classes(game::CardState::Matched, Some(&red));
        assert!(matched.contains("matched"));
    }

    #[test]
    fn best_score_is_stored_as_plain_number() {
        assert_eq!(serde_json::to_string(&BestScore(7)).unwrap(), "7");
        assert_eq!(<BestScore as StorageKey>::KEY, "memoria:best-score");
    }
}
