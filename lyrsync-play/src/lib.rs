//
// lyrsync-play
// external playback collaborator: mpg123 remote control + shared elapsed-time clock
//
mod clock;
mod remote;

pub use clock::PlaybackClock;
pub use remote::Mpg123Remote;
