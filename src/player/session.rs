//! A player session: the loaded record plus the store it came from

use super::record::PlayerRecord;
use super::store::{PlayerStore, StoreError};
use crate::game::Round;
use crate::wordlists::Dictionary;

/// Owns the store and the in-memory record
///
/// Every mutation goes through `&mut self` and is persisted before the method
/// returns. If persisting fails the in-memory change is kept and the error is
/// returned.
#[derive(Debug)]
pub struct Session<S: PlayerStore> {
    store: S,
    record: PlayerRecord,
}

impl<S: PlayerStore> Session<S> {
    /// Load the record from `store`, starting fresh if none was saved
    ///
    /// # Errors
    /// Returns `StoreError` if the store cannot be read.
    pub fn open(mut store: S) -> Result<Self, StoreError> {
        let record = store.load()?.unwrap_or_else(|| {
            log::info!("no saved player record, starting fresh");
            PlayerRecord::default()
        });
        Ok(Self { store, record })
    }

    #[must_use]
    pub const fn record(&self) -> &PlayerRecord {
        &self.record
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Fold a finished round into the statistics and persist
    ///
    /// Returns `Ok(false)` without saving if the round has not ended.
    ///
    /// # Errors
    /// Returns `StoreError` if the save failed; the statistics are updated anyway.
    pub fn record_outcome<D: Dictionary + ?Sized>(
        &mut self,
        round: &Round<'_, D>,
    ) -> Result<bool, StoreError> {
        if !self.record.record_outcome(round) {
            log::warn!("ignoring outcome of a round still in play");
            return Ok(false);
        }
        log::debug!(
            "recorded {:?}: played {}, won {}",
            round.outcome(),
            self.record.played,
            self.record.won
        );
        self.persist()?;
        Ok(true)
    }

    /// # Errors
    /// Returns `StoreError` if the save failed; the setting is changed anyway.
    pub fn set_high_contrast(&mut self, enabled: bool) -> Result<(), StoreError> {
        self.record.settings.high_contrast = enabled;
        self.persist()
    }

    /// # Errors
    /// Returns `StoreError` if the save failed; the setting is changed anyway.
    pub fn set_hard_mode(&mut self, enabled: bool) -> Result<(), StoreError> {
        self.record.settings.hard_mode = enabled;
        self.persist()
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        self.store.save(&self.record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::player::MemoryStore;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;

    fn finished_round<'d>(dict: &'d WordList, guesses: &[&str]) -> Round<'d, WordList> {
        let mut round = Round::with_answer(dict, Word::new("crane").unwrap()).unwrap();
        for guess in guesses {
            round.submit_guess(guess).unwrap();
        }
        round
    }

    fn dictionary() -> WordList {
        WordList::new(
            words_from_slice(&["crane"]),
            words_from_slice(&["slate", "audio", "robot", "speed", "floor", "lolly"]),
        )
    }

    #[test]
    fn open_without_saved_record_uses_defaults() {
        let session = Session::open(MemoryStore::new()).unwrap();
        assert_eq!(session.record(), &PlayerRecord::default());
        assert_eq!(session.store().save_count(), 0);
    }

    #[test]
    fn open_restores_saved_record() {
        let saved = PlayerRecord {
            played: 3,
            won: 2,
            ..PlayerRecord::default()
        };
        let session = Session::open(MemoryStore::with_record(saved.clone())).unwrap();
        assert_eq!(session.record(), &saved);
    }

    #[test]
    fn outcome_is_saved_immediately() {
        let dict = dictionary();
        let mut session = Session::open(MemoryStore::new()).unwrap();

        let round = finished_round(&dict, &["slate", "crane"]);
        assert!(session.record_outcome(&round).unwrap());

        assert_eq!(session.store().save_count(), 1);
        let saved = session.store().saved().unwrap();
        assert_eq!(saved.won, 1);
        assert_eq!(saved.distribution[1], 1);
    }

    #[test]
    fn unfinished_round_is_not_recorded() {
        let dict = dictionary();
        let mut session = Session::open(MemoryStore::new()).unwrap();

        let round = finished_round(&dict, &["slate"]);
        assert!(!session.record_outcome(&round).unwrap());
        assert_eq!(session.record().played, 0);
        assert_eq!(session.store().save_count(), 0);
    }

    #[test]
    fn failed_save_keeps_in_memory_update() {
        let dict = dictionary();
        let mut session = Session::open(MemoryStore::new().failing()).unwrap();

        let round = finished_round(&dict, &["crane"]);
        assert!(session.record_outcome(&round).is_err());
        assert_eq!(session.record().played, 1);
        assert_eq!(session.record().won, 1);
        assert!(session.store().saved().is_none());
    }

    #[test]
    fn settings_are_independent_writes() {
        let mut session = Session::open(MemoryStore::new()).unwrap();
        session.set_high_contrast(true).unwrap();
        session.set_hard_mode(true).unwrap();
        session.set_high_contrast(false).unwrap();

        let saved = session.store().saved().unwrap();
        assert!(!saved.settings.high_contrast);
        assert!(saved.settings.hard_mode);
        assert_eq!(saved.played, 0);
        assert_eq!(session.store().save_count(), 3);
    }
}
