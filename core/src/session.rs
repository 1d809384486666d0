use crate::*;

/// Runs a [`MatchEngine`] against its host: a best-score store and a timer facility.
///
/// The best score is read from the store once, when the session starts, and written once per
/// won game. Store failures are logged and play continues.
pub struct GameSession<St, Sc: RevertScheduler, Sh = RandomShuffler> {
    engine: MatchEngine<Sh>,
    store: St,
    scheduler: Sc,
    armed: Option<(RevertTicket, Sc::Handle)>,
}

impl<St, Sc, Sh> GameSession<St, Sc, Sh>
where
    St: BestScoreStore,
    Sc: RevertScheduler,
    Sh: DeckShuffler,
{
    pub fn new(mut engine: MatchEngine<Sh>, store: St, scheduler: Sc) -> Self {
        let best = match store.load_best() {
            Ok(best) => best,
            Err(err) => {
                log::warn!("Could not load best score, starting without one: {:?}", err);
                None
            }
        };
        log::debug!("best score at start: {:?}", best);
        engine.set_best_attempts(best);
        Self {
            engine,
            store,
            scheduler,
            armed: None,
        }
    }

    pub fn engine(&self) -> &MatchEngine<Sh> {
        &self.engine
    }

    pub fn stats(&self) -> GameStats {
        self.engine.stats()
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    pub fn scheduler(&self) -> &Sc {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Sc {
        &mut self.scheduler
    }

    pub fn select_card(&mut self, position: Position) -> Result<SelectOutcome> {
        let outcome = self.engine.select_card(position)?;
        match outcome {
            SelectOutcome::MismatchPending(revert) => {
                let handle = self.scheduler.schedule(revert);
                if let Some((_, stale)) = self.armed.replace((revert.ticket, handle)) {
                    self.scheduler.cancel(stale);
                }
            }
            SelectOutcome::Won { attempts } => self.on_win(attempts),
            SelectOutcome::Ignored | SelectOutcome::RevealedFirst | SelectOutcome::Matched => {}
        }
        Ok(outcome)
    }

    /// Entry point for a fired revert timer.
    pub fn fire_revert(&mut self, ticket: RevertTicket) -> RevertOutcome {
        if matches!(self.armed, Some((armed, _)) if armed == ticket) {
            self.armed = None;
        }
        self.engine.resolve_revert(ticket)
    }

    /// Cancels the outstanding revert timer, if any, and deals a new board.
    pub fn reset(&mut self) -> &[Card] {
        if let Some((ticket, handle)) = self.armed.take() {
            log::debug!("cancelling revert {} timer", ticket.id());
            self.scheduler.cancel(handle);
        }
        self.engine.reset()
    }

    fn on_win(&mut self, attempts: AttemptCount) {
        let Some(best) = self.engine.record_win() else {
            return;
        };
        log::info!("won in {} attempts, best is {}", attempts, best);
        if let Err(err) = self.store.save_best(best) {
            log::warn!("Could not save best score: {:?}", err);
        }
    }
}
