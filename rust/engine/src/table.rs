//! The round state machine.
//!
//! A [`Table`] owns the seats, the pot, the card source and the event sink.
//! Every change goes through its methods so chip totals can only move between
//! balances, current bets and the pot.
//!
//! ```
//! use fivedraw_engine::deck::Deck;
//! use fivedraw_engine::config::TableConfig;
//! use fivedraw_engine::game::Phase;
//! use fivedraw_engine::player::PlayerAction;
//! use fivedraw_engine::table::{SeatSpec, Table};
//!
//! let seats = vec![SeatSpec::human("YOU"), SeatSpec::cpu("Tex")];
//! let mut table = Table::new(TableConfig::default(), seats, Box::new(Deck::new_with_seed(7))).unwrap();
//! table.start_round().unwrap();
//! assert_eq!(table.pot(), 20);
//!
//! // seat 1 sits after the dealer and acts first; both fold-or-call the ante
//! table.apply_action(1, PlayerAction::Call).unwrap();
//! table.apply_action(0, PlayerAction::Call).unwrap();
//! assert_eq!(table.phase(), Phase::Draw);
//! assert_eq!(table.pot(), 40);
//! ```

use serde::{Deserialize, Serialize};

use crate::betting::{BettingRound, Turn};
use crate::cards::Card;
use crate::config::{TableConfig, MAX_SEATS, MIN_SEATS};
use crate::deck::{draw_with_retry, CardSource};
use crate::errors::GameError;
use crate::events::{EventSink, NullSink, TableEvent};
use crate::game::Phase;
use crate::hand::{evaluate_slice, HandEvaluation};
use crate::logger::{ActionRecord, DrawRecord, RoundRecord, ShowdownInfo};
use crate::player::{Player, PlayerAction, HAND_SIZE};
use crate::rules::{validate_action, ValidatedAction};

/// Who sits in a seat when the table is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSpec {
    pub name: String,
    pub human: bool,
}

impl SeatSpec {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            human: true,
        }
    }

    pub fn cpu(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            human: false,
        }
    }
}

/// How the last round ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub round: u32,
    /// `None` when the round was aborted and every contribution refunded.
    pub winner: Option<usize>,
    pub amount: u32,
    /// False when everyone else folded and no hand was shown.
    pub revealed: bool,
    pub hand_name: Option<String>,
}

pub struct Table {
    config: TableConfig,
    players: Vec<Player>,
    pot: u32,
    dealer: usize,
    phase: Phase,
    betting: BettingRound,
    acting: Option<usize>,
    round: u32,
    source: Box<dyn CardSource>,
    sink: Box<dyn EventSink>,
    seed: Option<u64>,
    record: RoundRecord,
    outcome: Option<RoundOutcome>,
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("phase", &self.phase)
            .field("round", &self.round)
            .field("pot", &self.pot)
            .field("dealer", &self.dealer)
            .field("betting", &self.betting)
            .field("acting", &self.acting)
            .field("players", &self.players)
            .finish_non_exhaustive()
    }
}

impl Table {
    /// Seats players in the given order with `config.starting_balance` each.
    pub fn new(
        config: TableConfig,
        seats: Vec<SeatSpec>,
        source: Box<dyn CardSource>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if !(MIN_SEATS..=MAX_SEATS).contains(&seats.len()) {
            return Err(GameError::InvalidConfig(format!(
                "a table seats {}-{} players, got {}",
                MIN_SEATS,
                MAX_SEATS,
                seats.len()
            )));
        }
        let chips = u64::from(config.starting_balance) * seats.len() as u64;
        if chips > u64::from(u32::MAX) {
            return Err(GameError::InvalidConfig(format!(
                "{} seats of {} chips exceed the largest pot ({})",
                seats.len(),
                config.starting_balance,
                u32::MAX
            )));
        }
        let players = seats
            .into_iter()
            .enumerate()
            .map(|(i, s)| Player::new(i, s.human, s.name, config.starting_balance))
            .collect();
        Ok(Self {
            config,
            players,
            pot: 0,
            dealer: 0,
            phase: Phase::Setup,
            betting: BettingRound::open(0, 0),
            acting: None,
            round: 0,
            source,
            sink: Box::new(NullSink),
            seed: None,
            record: RoundRecord::default(),
            outcome: None,
        })
    }

    pub fn with_sink(mut self, sink: Box<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Seed of the card source, copied into round records for replay.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, seat: usize) -> Result<&Player, GameError> {
        self.players.get(seat).ok_or(GameError::InvalidSeat(seat))
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn round_number(&self) -> u32 {
        self.round
    }
    pub fn required_bet(&self) -> u32 {
        self.betting.required_bet
    }
    pub fn last_raiser(&self) -> usize {
        self.betting.last_raiser
    }
    /// Seat whose action the table is waiting for, if a street is running.
    pub fn to_act(&self) -> Option<usize> {
        self.acting
    }
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }
    pub fn record(&self) -> &RoundRecord {
        &self.record
    }

    /// Chips `seat` must add to stay in the street.
    pub fn to_call(&self, seat: usize) -> Result<u32, GameError> {
        Ok(self.betting.to_call(self.player(seat)?))
    }

    /// Pot plus every balance and every bet still in front of a player.
    pub fn total_chips(&self) -> u64 {
        self.pot as u64
            + self
                .players
                .iter()
                .map(|p| p.balance() as u64 + p.current_bet() as u64)
                .sum::<u64>()
    }

    /// Seats with chips left, i.e. who can still be dealt in.
    pub fn funded_seats(&self) -> usize {
        self.players.iter().filter(|p| p.balance() > 0).count()
    }

    /// Deals a new round: antes, five cards to every funded seat, first street opens.
    ///
    /// Cards are fetched before anything else changes, so a card-source
    /// failure leaves the table exactly as it was.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        if self.phase.in_round() {
            return Err(GameError::RoundInProgress);
        }
        self.config.validate()?;
        let funded = self.funded_seats();
        if funded < MIN_SEATS {
            return Err(GameError::NotEnoughPlayers { funded });
        }

        let n = self.players.len();
        let dealer = if self.round == 0 {
            self.dealer
        } else {
            (self.dealer + 1) % n
        };

        self.source.new_round()?;
        let mut cards = draw_with_retry(self.source.as_mut(), funded * HAND_SIZE)?.into_iter();

        self.transition(Phase::PreDraw)?;
        self.round += 1;
        self.dealer = dealer;
        self.pot = 0;
        self.outcome = None;
        self.record = RoundRecord {
            round: self.round,
            seed: self.seed,
            dealer,
            ante: self.config.ante,
            starting_balances: self.players.iter().map(|p| p.balance()).collect(),
            ..RoundRecord::default()
        };

        for p in &mut self.players {
            let funded = p.balance() > 0;
            p.reset_round();
            if !funded {
                p.sit_out();
                continue;
            }
            self.pot += p.post_ante(self.config.ante);
            p.set_hand(cards.by_ref().take(HAND_SIZE).collect());
        }

        tracing::info!(round = self.round, dealer, pot = self.pot, funded, "round started");
        self.sink.emit(TableEvent::RoundStarted {
            round: self.round,
            dealer,
        });
        self.emit_pot();
        for seat in 0..n {
            self.emit_player(seat);
        }

        self.betting = BettingRound::open((dealer + 1) % n, self.config.ante);
        self.resolve_turn()
    }

    /// Applies `action` for `seat`, which must be the seat in [`Table::to_act`].
    /// Closing the street moves the table to the next phase before returning.
    pub fn apply_action(
        &mut self,
        seat: usize,
        action: PlayerAction,
    ) -> Result<ValidatedAction, GameError> {
        if !self.phase.is_betting() {
            return Err(GameError::WrongPhase { phase: self.phase });
        }
        let expected = self.acting.ok_or(GameError::NoRoundInProgress)?;
        let player = self.player(seat)?;
        if seat != expected {
            return Err(GameError::NotPlayersTurn {
                expected,
                actual: seat,
            });
        }
        let validated = validate_action(player.balance(), self.betting.to_call(player), action)?;
        self.betting.apply(&mut self.players, seat, validated)?;

        tracing::debug!(
            round = self.round,
            seat,
            action = ?validated,
            required = self.betting.required_bet,
            "action applied"
        );
        self.record.actions.push(ActionRecord {
            seat,
            street: self.phase,
            action,
        });
        self.emit_player(seat);

        match self.betting.advance(&self.players) {
            Turn::Act(next) => self.set_acting(next),
            Turn::Closed => self.close_street()?,
        }
        Ok(validated)
    }

    /// Registers which cards `seat` throws away in the draw (indices 0..5).
    /// Calling again replaces the previous selection.
    pub fn set_discards(&mut self, seat: usize, indices: &[usize]) -> Result<(), GameError> {
        if self.phase != Phase::Draw {
            return Err(GameError::WrongPhase { phase: self.phase });
        }
        let player = self
            .players
            .get_mut(seat)
            .ok_or(GameError::InvalidSeat(seat))?;
        if player.is_folded() {
            return Err(GameError::PlayerAlreadyFolded);
        }
        player.select_discards(indices)
    }

    /// Replaces every registered discard and opens the second street.
    ///
    /// Replacements for all seats are fetched before any hand is touched. A
    /// card-source failure leaves every hand and discard selection as it was,
    /// with the cards already fetched sent to the muck.
    pub fn complete_draw(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Draw {
            return Err(GameError::WrongPhase { phase: self.phase });
        }
        let mut fetched: Vec<(usize, Vec<Card>)> = Vec::new();
        for p in &self.players {
            let wanted = p.discards().len();
            if p.is_folded() || wanted == 0 {
                continue;
            }
            match draw_with_retry(self.source.as_mut(), wanted) {
                Ok(fresh) => fetched.push((p.seat(), fresh)),
                Err(e) => {
                    for (_, fresh) in &fetched {
                        self.source.muck(fresh);
                    }
                    return Err(e.into());
                }
            }
        }

        for (seat, fresh) in fetched {
            let player = &mut self.players[seat];
            let thrown = player.take_discards();
            player.receive(fresh.clone());
            self.source.muck(&thrown);
            tracing::debug!(round = self.round, seat, cards = fresh.len(), "draw");
            self.record.draws.push(DrawRecord {
                seat,
                discarded: thrown,
                received: fresh,
            });
            self.emit_player(seat);
        }
        self.transition(Phase::PostDraw)?;
        self.resolve_turn()
    }

    /// Ends a round that cannot continue (e.g. the card source failed for
    /// good): everything each player put in goes back to them.
    pub fn abort_round(&mut self) -> Result<(), GameError> {
        if !self.phase.in_round() {
            return Err(GameError::NoRoundInProgress);
        }
        for p in &mut self.players {
            p.refund();
        }
        self.pot = 0;
        self.acting = None;
        self.transition(Phase::Showdown)?;
        tracing::warn!(round = self.round, "round aborted, contributions refunded");
        self.finish(None, 0, false, None);
        Ok(())
    }

    fn transition(&mut self, next: Phase) -> Result<(), GameError> {
        if !self.phase.can_advance_to(next) {
            return Err(GameError::WrongPhase { phase: self.phase });
        }
        self.phase = next;
        self.sink.emit(TableEvent::PhaseChanged { phase: next });
        Ok(())
    }

    fn resolve_turn(&mut self) -> Result<(), GameError> {
        match self.betting.select(&self.players) {
            Turn::Act(seat) => {
                self.set_acting(seat);
                Ok(())
            }
            Turn::Closed => self.close_street(),
        }
    }

    fn set_acting(&mut self, seat: usize) {
        self.acting = Some(seat);
        self.sink.emit(TableEvent::TurnChanged { seat });
    }

    fn close_street(&mut self) -> Result<(), GameError> {
        self.acting = None;
        for p in &mut self.players {
            self.pot += p.collect_bet();
            p.set_status("");
        }
        let n = self.players.len();
        self.betting = BettingRound::open((self.dealer + 1) % n, 0);
        tracing::debug!(round = self.round, phase = ?self.phase, pot = self.pot, "street closed");
        self.emit_pot();
        for seat in 0..n {
            self.emit_player(seat);
        }

        let contenders: Vec<usize> = self
            .players
            .iter()
            .filter(|p| !p.is_folded())
            .map(|p| p.seat())
            .collect();
        match (self.phase, contenders.as_slice()) {
            (Phase::PreDraw | Phase::PostDraw, [only]) => {
                let only = *only;
                self.transition(Phase::Showdown)?;
                self.award(only, false, None);
                Ok(())
            }
            (Phase::PreDraw, _) => self.transition(Phase::Draw),
            (Phase::PostDraw, _) => {
                self.transition(Phase::Showdown)?;
                self.showdown();
                Ok(())
            }
            (phase, _) => Err(GameError::WrongPhase { phase }),
        }
    }

    /// Reveals every live hand and pays the strictly best score; ties go to
    /// the lowest seat.
    fn showdown(&mut self) {
        let mut best: Option<(usize, HandEvaluation)> = None;
        for seat in 0..self.players.len() {
            let p = &mut self.players[seat];
            if p.is_folded() {
                continue;
            }
            let Some(ev) = evaluate_slice(p.hand()) else {
                continue;
            };
            p.set_status(ev.name.clone());
            let cards = p.hand().to_vec();
            self.sink.emit(TableEvent::HandRevealed {
                seat,
                cards,
                hand_name: ev.name.clone(),
            });
            self.emit_player(seat);
            if best.as_ref().is_none_or(|(_, b)| ev.score > b.score) {
                best = Some((seat, ev));
            }
        }
        match best {
            Some((seat, ev)) => self.award(seat, true, Some(ev.name)),
            None => {
                for p in &mut self.players {
                    p.refund();
                }
                self.pot = 0;
                self.finish(None, 0, true, None);
            }
        }
    }

    fn award(&mut self, seat: usize, revealed: bool, hand_name: Option<String>) {
        let amount = self.pot;
        self.players[seat].add_chips(amount);
        self.pot = 0;
        self.emit_pot();
        self.emit_player(seat);
        self.finish(Some(seat), amount, revealed, hand_name);
    }

    fn finish(&mut self, winner: Option<usize>, amount: u32, revealed: bool, hand_name: Option<String>) {
        self.record.pot = amount;
        self.record.hands = self.players.iter().map(|p| p.hand().to_vec()).collect();
        self.record.result = Some(match winner {
            Some(seat) => format!("seat {} wins {}", seat, amount),
            None => "aborted".to_string(),
        });
        if revealed {
            self.record.showdown = Some(ShowdownInfo {
                winners: winner.into_iter().collect(),
                notes: hand_name.clone(),
            });
        }
        tracing::info!(round = self.round, ?winner, amount, revealed, "round ended");
        self.sink.emit(TableEvent::RoundEnded {
            round: self.round,
            winner,
            amount,
            revealed,
        });
        self.outcome = Some(RoundOutcome {
            round: self.round,
            winner,
            amount,
            revealed,
            hand_name,
        });
    }

    fn emit_pot(&mut self) {
        self.sink.emit(TableEvent::PotUpdated { pot: self.pot });
    }

    fn emit_player(&mut self, seat: usize) {
        let p = &self.players[seat];
        let event = TableEvent::PlayerUpdated {
            seat,
            balance: p.balance(),
            current_bet: p.current_bet(),
            status: p.status().to_string(),
            folded: p.is_folded(),
            all_in: p.is_all_in(),
        };
        self.sink.emit(event);
    }
}
