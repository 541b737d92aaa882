//! The single output sink. Every answer and prophecy funnels through here,
//! so the terminal only ever shows one message being typed at a time.

use std::time::Duration;

use anyhow::Result;
use rand::RngExt;
use rand::rngs::StdRng;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::UnboundedReceiver;

/// Cooldown between printed messages, in time units.
const COOLDOWN_UNITS: u32 = 5;

/// Per-character delay bounds, in time-unit milliseconds.
const CHAR_DELAY_MS: std::ops::Range<u32> = 10..60;

/// Consume the merged answer/prophecy stream until every sender is gone,
/// typing each message out quote-wrapped, one paced character at a time.
pub async fn run<W>(
    mut messages: UnboundedReceiver<String>,
    mut out: W,
    time_unit: Duration,
    mut rng: StdRng,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(message) = messages.recv().await {
        type_out(&mut out, "\"", time_unit, &mut rng).await?;
        type_out(&mut out, &message, time_unit, &mut rng).await?;
        type_out(&mut out, "\"", time_unit, &mut rng).await?;
        out.write_all(b"\n").await?;
        out.flush().await?;

        tokio::time::sleep(time_unit * COOLDOWN_UNITS).await;
    }
    Ok(())
}

/// Write one character at a time, each after its own random delay.
async fn type_out<W>(
    out: &mut W,
    text: &str,
    time_unit: Duration,
    rng: &mut StdRng,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut utf8 = [0u8; 4];
    for c in text.chars() {
        let ms = rng.random_range(CHAR_DELAY_MS);
        tokio::time::sleep(time_unit * ms / 1000).await;
        out.write_all(c.encode_utf8(&mut utf8).as_bytes()).await?;
        out.flush().await?;
    }
    Ok(())
}
