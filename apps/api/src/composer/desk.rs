//! Generation desk: simulated generation latency with last-invocation-wins.
//!
//! Every `generate` call for a session takes a ticket, waits out the delay,
//! and only composes if its ticket is still the newest for that session.
//! Older calls resolve to `AppError::Superseded` without producing output.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::{info, warn};
use uuid::Uuid;

use crate::composer::engine::{Composer, GeneratedPrompt};
use crate::composer::selection::Selection;
use crate::errors::AppError;

pub struct GenerationDesk {
    delay: Duration,
    next_ticket: AtomicU64,
    latest: Mutex<HashMap<Uuid, u64>>,
}

/// Clears the session entry on drop if this ticket is still the newest,
/// including when the request future is dropped mid-delay.
struct Ticket<'a> {
    desk: &'a GenerationDesk,
    session: Uuid,
    number: u64,
}

impl Drop for Ticket<'_> {
    fn drop(&mut self) {
        let mut latest = self.desk.latest();
        if latest.get(&self.session) == Some(&self.number) {
            latest.remove(&self.session);
        }
    }
}

impl GenerationDesk {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_ticket: AtomicU64::new(0),
            latest: Mutex::new(HashMap::new()),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sessions with a generation still waiting out the delay.
    pub fn pending(&self) -> usize {
        self.latest().len()
    }

    pub async fn generate(
        &self,
        session: Uuid,
        composer: &Composer,
        selection: &Selection,
    ) -> Result<GeneratedPrompt, AppError> {
        let ticket = self.issue(session);

        tokio::time::sleep(self.delay).await;

        if !self.is_latest(&ticket) {
            warn!(%session, ticket = ticket.number, "Generation superseded by a newer request");
            return Err(AppError::Superseded);
        }

        let generated = composer.compose(selection)?;
        info!(
            %session,
            ticket = ticket.number,
            words = generated.word_count,
            "Prompt generated"
        );
        Ok(generated)
    }

    fn issue(&self, session: Uuid) -> Ticket<'_> {
        let number = self.next_ticket.fetch_add(1, Ordering::Relaxed) + 1;
        self.latest().insert(session, number);
        Ticket {
            desk: self,
            session,
            number,
        }
    }

    fn is_latest(&self, ticket: &Ticket<'_>) -> bool {
        self.latest().get(&ticket.session) == Some(&ticket.number)
    }

    fn latest(&self) -> MutexGuard<'_, HashMap<Uuid, u64>> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::redaction::RedactionMode;
    use crate::composer::strategy::StrategyKind;

    fn composer() -> Composer {
        Composer::new(StrategyKind::Simple.build(), RedactionMode::Mask, Some(1))
    }

    fn selection(subject: &str) -> Selection {
        Selection {
            subject: subject.to_string(),
            ..Selection::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_generation_completes_after_delay() {
        let desk = GenerationDesk::new(Duration::from_millis(1500));
        let composer = composer();
        let started = tokio::time::Instant::now();

        let out = desk
            .generate(Uuid::new_v4(), &composer, &selection("kites"))
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert!(out.prompt.contains("kites"));
        assert_eq!(desk.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_request_supersedes_older_for_same_session() {
        let desk = GenerationDesk::new(Duration::from_millis(1500));
        let composer = composer();
        let session = Uuid::new_v4();
        let first_sel = selection("first");
        let second_sel = selection("second");

        let (first, second) = tokio::join!(desk.generate(session, &composer, &first_sel), async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            desk.generate(session, &composer, &second_sel).await
        });

        assert!(matches!(first, Err(AppError::Superseded)));
        let second = second.unwrap();
        assert!(second.prompt.contains("second"));
        assert_eq!(desk.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sessions_do_not_interfere() {
        let desk = GenerationDesk::new(Duration::from_millis(1500));
        let composer = composer();
        let a_sel = selection("alpha");
        let b_sel = selection("beta");

        let (a, b) = tokio::join!(
            desk.generate(Uuid::new_v4(), &composer, &a_sel),
            desk.generate(Uuid::new_v4(), &composer, &b_sel)
        );

        assert!(a.unwrap().prompt.contains("alpha"));
        assert!(b.unwrap().prompt.contains("beta"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_request_releases_its_session() {
        let desk = GenerationDesk::new(Duration::from_millis(1500));
        let composer = composer();
        let sel = selection("abandoned");

        let result = tokio::time::timeout(
            Duration::from_millis(100),
            desk.generate(Uuid::new_v4(), &composer, &sel),
        )
        .await;

        assert!(result.is_err(), "request should still be waiting");
        assert_eq!(desk.pending(), 0);
    }
}
