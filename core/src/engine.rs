use alloc::vec::Vec;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
}

impl EngineState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Completed two-card comparisons in the current game.
    pub attempts: AttemptCount,
    pub matches: PairCount,
    /// Fewest attempts over all won games, `None` until a game is won.
    pub best_attempts: Option<AttemptCount>,
}

/// Identifies one scheduled revert of a mismatched pair.
///
/// Ids are never reused by an engine, so a ticket outliving a reset is recognized as stale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevertTicket {
    id: u32,
    first: Position,
    second: Position,
}

impl RevertTicket {
    pub const fn id(self) -> u32 {
        self.id
    }

    pub const fn positions(self) -> (Position, Position) {
        (self.first, self.second)
    }
}

/// A revert the host must fire back through [`MatchEngine::resolve_revert`] after `delay`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRevert {
    pub ticket: RevertTicket,
    pub delay: Duration,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    Ignored,
    RevealedFirst,
    Matched,
    Won { attempts: AttemptCount },
    MismatchPending(PendingRevert),
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevertOutcome {
    /// Both cards flipped back and the selection lock is released.
    Resolved,
    /// The ticket no longer matches the engine, nothing changed.
    Stale,
}

impl RevertOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Selection {
    Idle,
    First(Position),
    Reverting(RevertTicket),
}

/// What a renderer needs to draw the board, identities of face-down cards withheld.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub cards: Vec<CardSnapshot>,
    pub stats: GameStats,
    pub state: EngineState,
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub position: Position,
    pub state: CardState,
    pub identity: Option<CardIdentity>,
}

#[derive(Clone, Debug)]
pub struct MatchEngine<S = RandomShuffler> {
    deck: DeckConfig,
    cards: Vec<Card>,
    selection: Selection,
    stats: GameStats,
    state: EngineState,
    next_ticket: u32,
    shuffler: S,
}

impl<S: DeckShuffler> MatchEngine<S> {
    /// Deals a freshly shuffled board from `deck`.
    pub fn new(deck: DeckConfig, shuffler: S) -> Self {
        let mut engine = Self::empty(deck, shuffler);
        engine.deal();
        engine
    }

    /// Lays out `identities` in the given order, without shuffling.
    pub fn from_layout(identities: Vec<CardIdentity>, shuffler: S) -> Result<Self> {
        let deck = DeckConfig::new(identities.clone())?;
        let mut engine = Self::empty(deck, shuffler);
        engine.lay_out(identities);
        Ok(engine)
    }

    fn empty(deck: DeckConfig, shuffler: S) -> Self {
        Self {
            deck,
            cards: Vec::new(),
            selection: Selection::Idle,
            stats: GameStats::default(),
            state: EngineState::default(),
            next_ticket: 0,
            shuffler,
        }
    }

    /// Replaces the board with `identities` in order, all face-down.
    ///
    /// The identities become the deck future resets are dealt from. On error the current game is
    /// left untouched.
    pub fn initialize(&mut self, identities: Vec<CardIdentity>) -> Result<&[Card]> {
        self.deck = DeckConfig::new(identities.clone())?;
        self.lay_out(identities);
        Ok(&self.cards)
    }

    /// Discards the board and deals a reshuffled one, invalidating any pending revert.
    pub fn reset(&mut self) -> &[Card] {
        if let Selection::Reverting(ticket) = self.selection {
            log::debug!("reset drops pending revert {}", ticket.id);
        }
        self.deal();
        &self.cards
    }

    fn deal(&mut self) {
        let identities = self.shuffler.shuffled(self.deck.identities().to_vec());
        self.lay_out(identities);
    }

    fn lay_out(&mut self, identities: Vec<CardIdentity>) {
        self.cards = identities
            .into_iter()
            .enumerate()
            .map(|(index, identity)| Card::new(to_position(index), identity))
            .collect();
        self.selection = Selection::Idle;
        self.state = EngineState::Playing;
        self.stats.attempts = 0;
        self.stats.matches = 0;
    }

    pub fn shuffler(&self) -> &S {
        &self.shuffler
    }
}

impl<S> MatchEngine<S> {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_at(&self, position: Position) -> Option<&Card> {
        self.cards.get(usize::from(position))
    }

    pub fn deck(&self) -> &DeckConfig {
        &self.deck
    }

    pub fn pair_count(&self) -> PairCount {
        self.deck.pair_count()
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    /// The card waiting for a second selection, if any.
    pub fn pending_first(&self) -> Option<Position> {
        match self.selection {
            Selection::First(position) => Some(position),
            _ => None,
        }
    }

    pub fn pending_revert(&self) -> Option<RevertTicket> {
        match self.selection {
            Selection::Reverting(ticket) => Some(ticket),
            _ => None,
        }
    }

    /// Whether selections are currently ignored because a mismatch is still showing.
    pub fn is_locked(&self) -> bool {
        matches!(self.selection, Selection::Reverting(_))
    }

    /// Seeds the best score, typically from a persistence store at startup.
    pub fn set_best_attempts(&mut self, best: Option<AttemptCount>) {
        self.stats.best_attempts = best;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            cards: self
                .cards
                .iter()
                .map(|card| CardSnapshot {
                    position: card.position,
                    state: card.state,
                    identity: card.visible_identity().cloned(),
                })
                .collect(),
            stats: self.stats,
            state: self.state,
            locked: self.is_locked(),
        }
    }

    /// Single entry point for player input.
    ///
    /// Matched cards, the card already waiting for a partner, and any card while a mismatch is
    /// still showing are ignored rather than rejected.
    pub fn select_card(&mut self, position: Position) -> Result<SelectOutcome> {
        let index = self.validate_position(position)?;

        let outcome = match self.selection {
            Selection::Reverting(ticket) => {
                log::trace!("select {}: revert {} pending, ignored", position, ticket.id);
                SelectOutcome::Ignored
            }
            _ if self.cards[index].state.is_matched() => {
                log::trace!("select {}: already matched, ignored", position);
                SelectOutcome::Ignored
            }
            Selection::First(first) if first == position => {
                log::trace!("select {}: already pending, ignored", position);
                SelectOutcome::Ignored
            }
            Selection::Idle => {
                self.cards[index].state = CardState::Revealed;
                self.selection = Selection::First(position);
                SelectOutcome::RevealedFirst
            }
            Selection::First(first) => self.compare(first, position),
        };

        if outcome.has_update() {
            log::debug!("select {}: {:?}", position, outcome);
        }
        Ok(outcome)
    }

    fn compare(&mut self, first: Position, second: Position) -> SelectOutcome {
        let (first_index, second_index) = (usize::from(first), usize::from(second));

        self.stats.attempts = self.stats.attempts.saturating_add(1);
        self.cards[second_index].state = CardState::Revealed;

        if self.cards[first_index].identity == self.cards[second_index].identity {
            self.cards[first_index].state = CardState::Matched;
            self.cards[second_index].state = CardState::Matched;
            self.stats.matches += 1;
            self.selection = Selection::Idle;

            if self.stats.matches == self.deck.pair_count() {
                self.state = EngineState::Won;
                SelectOutcome::Won {
                    attempts: self.stats.attempts,
                }
            } else {
                SelectOutcome::Matched
            }
        } else {
            let ticket = RevertTicket {
                id: self.next_ticket,
                first,
                second,
            };
            self.next_ticket = self.next_ticket.wrapping_add(1);
            self.selection = Selection::Reverting(ticket);
            SelectOutcome::MismatchPending(PendingRevert {
                ticket,
                delay: REVERT_DELAY,
            })
        }
    }

    /// Flips a mismatched pair back face-down once its delay has elapsed.
    pub fn resolve_revert(&mut self, ticket: RevertTicket) -> RevertOutcome {
        match self.selection {
            Selection::Reverting(pending) if pending == ticket => {
                self.cards[usize::from(ticket.first)].state = CardState::Hidden;
                self.cards[usize::from(ticket.second)].state = CardState::Hidden;
                self.selection = Selection::Idle;
                log::debug!("revert {} resolved", ticket.id);
                RevertOutcome::Resolved
            }
            _ => {
                log::debug!("revert {} is stale, ignored", ticket.id);
                RevertOutcome::Stale
            }
        }
    }

    /// Folds the finished game into the best score and returns the new best.
    ///
    /// Does nothing unless the game is won.
    pub fn record_win(&mut self) -> Option<AttemptCount> {
        if !self.state.is_won() {
            return None;
        }
        let best = best_of(self.stats.best_attempts, self.stats.attempts);
        self.stats.best_attempts = Some(best);
        Some(best)
    }

    fn validate_position(&self, position: Position) -> Result<usize> {
        let index = usize::from(position);
        if index < self.cards.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidPosition(position))
        }
    }
}
