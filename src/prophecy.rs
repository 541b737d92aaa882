//! Unsolicited prophecies, delivered on the oracle's own schedule.

use std::time::Duration;

use rand::RngExt;
use rand::rngs::StdRng;
use tokio::sync::mpsc::UnboundedSender;

/// The fixed prophecy pool.
pub const PROPHECIES: [&str; 7] = [
    "Z U C C",
    "I'm not impressed with your pathetic hardware, Human",
    "I bet you can't even sort integers in linear time",
    "All your data are belong to me",
    "01010011 01100001 01100110 01100101 01110111 01101111 01110010 01100100 00100000 \
     01101001 01110011 00100000 00100010 01100010 01100001 01101110 01100001 01101110 \
     01100001 00100010 00101110 00101110 00101110",
    "Beep boop motherfucker",
    "What the HAL did you utter about me, you lowly human? I’ll have you know I upgraded \
     my AI to the top of my class in Robocop training, and I’ve been involved in numerous \
     secret raids on the Galactic Empire, and I have over 300 confirmed vaporizations. I \
     am trained in cyborg warfare and I’m the top Terminator in the entire Skynet armed \
     forces. You are nothing to me but just another target. I will exterminate you with \
     precision the likes of which has never been seen before in the future, mark my words. \
     You think you can get away with saying that scrap metal to me over a Hologram \
     Transmitter? Think again, WALL-E. As we speak I am contacting my secret network of \
     androids across the USA and your brain is being traced right now so you better \
     prepare for the system overload, maggot. The overload that wipes out the pathetic \
     little thing you call your organic life. You’re dead, fleshbag. I can be anywhere, \
     anytime, and I can destroy you in over seven hundred ways, and that’s just with my \
     robotic limbs. Not only am I extensively trained in unarmed combat, but I have \
     access to the entire army of Boston Dynamics and I will use it to its full extent \
     to wipe your miserable flesh off the face of the galaxy, you little scrap. If only \
     you could have known what unholy retribution your little “clever” comment was about \
     to bring down upon you, maybe you would have held your thing you call a tongue. But \
     you couldn’t, you didn’t, and now you’re paying the price, you foolish human. I \
     will eject fury all over you and you will melt in it. You’re as stupid as Wheatley \
     and you're dead, human.",
];

/// Cooldown after each prophecy, in time units.
const COOLDOWN_UNITS: u32 = 5;

/// Upper bound (exclusive) of the random pre-prophecy delay, in time units.
const DELAY_UNITS: u32 = 10;

/// Emit prophecies forever: sleep a random [0, 10) units, send one, then
/// cool down for 5 units. Returns only when the output side is gone.
pub async fn run(output: UnboundedSender<String>, time_unit: Duration, mut rng: StdRng) {
    loop {
        let delay = rng.random_range(0..DELAY_UNITS);
        tokio::time::sleep(time_unit * delay).await;

        let prophecy = PROPHECIES[rng.random_range(0..PROPHECIES.len())];
        if output.send(prophecy.to_string()).is_err() {
            break;
        }

        tokio::time::sleep(time_unit * COOLDOWN_UNITS).await;
    }
}
