//! Line-oriented tracing observer.
//!
//! See [`TraceObserver`] for usage.

use std::io::{self, Write};

use lagrange_core::Observer;

use crate::traits::{HasIteration, HasOutcome, HasResidualNorm};

/// Writes one line per solver event to an [`io::Write`] sink.
///
/// Each line has the form:
///
/// ```text
/// iter   3  accepted        |F| = 1.050673e0
/// ```
///
/// Tracing never steers the solver: `observe` always returns `None`.
/// The first write error is kept and reported by [`TraceObserver::finish`];
/// later events are skipped once a write has failed.
///
/// # Example
///
/// ```ignore
/// let mut trace = TraceObserver::new(std::io::stderr());
/// let solution = hybrid::solve(&model, &problem, x0, &config, &mut trace)?;
/// trace.finish()?;
/// ```
pub struct TraceObserver<W> {
    writer: W,
    prefix: Option<String>,
    error: Option<io::Error>,
}

impl<W: Write> TraceObserver<W> {
    /// Creates a tracer writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            prefix: None,
            error: None,
        }
    }

    /// Prepends `prefix` to every line.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Writes a trace line for `event`.
    pub fn record<E>(&mut self, event: &E)
    where
        E: HasIteration + HasOutcome + HasResidualNorm,
    {
        if self.error.is_some() {
            return;
        }

        let prefix = self.prefix.as_deref().unwrap_or_default();
        let result = writeln!(
            self.writer,
            "{prefix}iter {:>3}  {:<14}  |F| = {:e}",
            event.iter(),
            event.outcome(),
            event.residual_norm(),
        );
        if let Err(error) = result {
            self.error = Some(error);
        }
    }

    /// Flushes the writer and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first write error encountered while tracing, or the
    /// flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W, E, A> Observer<E, A> for TraceObserver<W>
where
    W: Write,
    E: HasIteration + HasOutcome + HasResidualNorm,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

/// Allows `&mut TraceObserver<W>` to be passed to solvers that take an
/// observer by value, so [`TraceObserver::finish`] can be called after the
/// solve completes.
impl<W, E, A> Observer<E, A> for &mut TraceObserver<W>
where
    W: Write,
    E: HasIteration + HasOutcome + HasResidualNorm,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Event {
        iter: usize,
        norm: f64,
    }

    impl HasIteration for Event {
        fn iter(&self) -> usize {
            self.iter
        }
    }

    impl HasOutcome for Event {
        fn outcome(&self) -> &'static str {
            "accepted"
        }
    }

    impl HasResidualNorm for Event {
        fn residual_norm(&self) -> f64 {
            self.norm
        }
    }

    // Helper to call observe without needing to specify the action type at each call site.
    fn feed<W: Write>(obs: &mut TraceObserver<W>, event: Event) {
        let _: Option<()> = obs.observe(&event);
    }

    fn lines(obs: TraceObserver<Vec<u8>>) -> Vec<String> {
        let bytes = obs.finish().expect("in-memory writes succeed");
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn writes_one_line_per_event() {
        let mut obs = TraceObserver::new(Vec::new());
        feed(&mut obs, Event { iter: 1, norm: 1.5 });
        feed(&mut obs, Event { iter: 12, norm: 0.25 });

        assert_eq!(
            lines(obs),
            [
                "iter   1  accepted        |F| = 1.5e0",
                "iter  12  accepted        |F| = 2.5e-1",
            ]
        );
    }

    #[test]
    fn prefix_is_prepended() {
        let mut obs = TraceObserver::new(Vec::new()).prefix("[solve] ");
        feed(&mut obs, Event { iter: 2, norm: f64::INFINITY });

        assert_eq!(lines(obs), ["[solve] iter   2  accepted        |F| = inf"]);
    }

    #[test]
    fn mutable_reference_observes_too() {
        let mut obs = TraceObserver::new(Vec::new());
        {
            let mut by_ref = &mut obs;
            let _: Option<()> = Observer::observe(&mut by_ref, &Event { iter: 1, norm: 1.0 });
        }
        assert_eq!(lines(obs).len(), 1);
    }

    /// Writer that always fails.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn finish_reports_first_write_error() {
        let mut obs = TraceObserver::new(Broken);
        feed(&mut obs, Event { iter: 1, norm: 1.0 });
        feed(&mut obs, Event { iter: 2, norm: 0.5 });

        let err = obs.finish().err().expect("write failed");
        assert_eq!(err.to_string(), "broken pipe");
    }
}
