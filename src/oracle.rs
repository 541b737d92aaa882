//! The oracle's front door: an intake channel that never blocks, one
//! answer task per question, a background prophecy generator, and the
//! single output sink, all wired over unbounded mpsc channels.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tokio::io::AsyncWrite;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::consts::clock_seed;
use crate::output;
use crate::prophecy;
use crate::responder;

/// Upper bound (exclusive) of the random answer delay, in time units.
const ANSWER_DELAY_UNITS: u32 = 10;

pub struct OracleConfig {
    /// Wall-clock length of one time unit. All documented delays scale
    /// through this, so tests can run on a shrunken clock.
    pub time_unit: Duration,
    /// Seed for every random draw the oracle makes.
    pub seed: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            time_unit: Duration::from_secs(1),
            seed: clock_seed(),
        }
    }
}

/// A running oracle. Dropping the handle closes the intake; in-flight
/// answers still print, then the background tasks wind down.
pub struct Oracle {
    questions: UnboundedSender<String>,
}

impl Oracle {
    /// Spawn an oracle that prints to stdout.
    pub fn spawn(config: OracleConfig) -> Self {
        Self::spawn_with_writer(config, tokio::io::stdout())
    }

    /// Spawn an oracle that prints to the given writer. Tests use this to
    /// capture the paced output.
    pub fn spawn_with_writer<W>(config: OracleConfig, writer: W) -> Self
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (questions_tx, questions_rx) = mpsc::unbounded_channel();
        let (output_tx, output_rx) = mpsc::unbounded_channel();

        // One seed in, an independent stream per role out.
        let mut root = StdRng::seed_from_u64(config.seed);
        let dispatcher_rng = StdRng::seed_from_u64(root.random());
        let prophecy_rng = StdRng::seed_from_u64(root.random());
        let sink_rng = StdRng::seed_from_u64(root.random());

        tokio::spawn(read_questions(
            questions_rx,
            output_tx.clone(),
            config.time_unit,
            dispatcher_rng,
        ));
        tokio::spawn(prophecy::run(output_tx, config.time_unit, prophecy_rng));
        tokio::spawn(async move {
            if let Err(e) = output::run(output_rx, writer, config.time_unit, sink_rng).await {
                eprintln!("output error: {e}");
            }
        });

        Self {
            questions: questions_tx,
        }
    }

    /// Submit a question. Never blocks, no matter how many answers are
    /// still in flight or how far behind the printer is.
    pub fn ask(&self, question: impl Into<String>) {
        // Send only fails after shutdown, when nobody is listening anyway.
        let _ = self.questions.send(question.into());
    }
}

/// Fan out: one independent answer task per question, each with its own
/// delay and rng so answers land in whatever order the delays dictate.
async fn read_questions(
    mut questions: UnboundedReceiver<String>,
    output: UnboundedSender<String>,
    time_unit: Duration,
    mut rng: StdRng,
) {
    while let Some(question) = questions.recv().await {
        let delay = rng.random_range(0..ANSWER_DELAY_UNITS);
        let task_seed: u64 = rng.random();
        let output = output.clone();

        tokio::spawn(async move {
            // An oracle that answers instantly would not be much of one.
            tokio::time::sleep(time_unit * delay).await;
            let mut rng = StdRng::seed_from_u64(task_seed);
            let answer = responder::respond(&question, &mut rng);
            let _ = output.send(answer);
        });
    }
}
