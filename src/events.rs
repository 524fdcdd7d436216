use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use nix::sys::signal::{SigSet, Signal};
use unsegen::input::Input;

use crate::config::Config;

pub enum Event {
    Input(Input),
    /// Periodic wake-up so "today" stays correct across midnight.
    Tick,
    /// One of the signals given to the dispatcher arrived, e.g. SIGWINCH.
    Signal,
}

/// Funnels terminal input, clock ticks and awaited signals into one channel
/// consumed by the UI.
pub struct Dispatcher {
    rx: mpsc::Receiver<Event>,
    _input_handle: thread::JoinHandle<()>,
    _tick_handle: thread::JoinHandle<()>,
    _signal_handle: Option<thread::JoinHandle<()>>,
}

impl Dispatcher {
    pub fn from_config(config: &Config, signals: SigSet) -> Dispatcher {
        Dispatcher::new(config.tick_rate, signals)
    }

    /// `signals` are blocked for the calling thread and every thread spawned
    /// from it afterwards, so call this before spawning other threads.
    pub fn new(tick_rate: Duration, signals: SigSet) -> Dispatcher {
        let (tx, rx) = mpsc::channel();

        let signal_handle = match signals.thread_block() {
            Ok(()) => {
                let tx = tx.clone();
                Some(thread::spawn(move || forward_signals(|| signals.wait(), tx)))
            }
            Err(e) => {
                log::warn!("Could not block signals {:?}: {}", signals, e);
                None
            }
        };

        let input_handle = {
            let tx = tx.clone();
            thread::spawn(move || {
                let stdin = io::stdin();
                let stdin = stdin.lock();
                for evt in Input::read_all(stdin) {
                    match evt {
                        Ok(input) => {
                            if tx.send(Event::Input(input)).is_err() {
                                return;
                            }
                        }
                        Err(e) => log::warn!("Could not read input: {}", e),
                    }
                }
            })
        };

        let tick_handle = thread::spawn(move || {
            while tx.send(Event::Tick).is_ok() {
                thread::sleep(tick_rate);
            }
        });

        Dispatcher {
            rx,
            _input_handle: input_handle,
            _tick_handle: tick_handle,
            _signal_handle: signal_handle,
        }
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

/// Sends an `Event::Signal` for every signal `wait` returns until it fails or
/// the receiving end is gone.
fn forward_signals<F>(mut wait: F, tx: mpsc::Sender<Event>)
where
    F: FnMut() -> nix::Result<Signal>,
{
    loop {
        match wait() {
            Ok(signal) => {
                log::debug!("Received {}", signal);
                if tx.send(Event::Signal).is_err() {
                    return;
                }
            }
            Err(e) => {
                log::warn!("Stopped waiting for signals: {}", e);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nix::errno::Errno;

    #[test]
    fn every_signal_wakes_up_the_ui() {
        let (tx, rx) = mpsc::channel();
        let mut pending = vec![Ok(Signal::SIGWINCH), Ok(Signal::SIGWINCH)].into_iter();

        forward_signals(|| pending.next().unwrap_or(Err(Errno::EINTR)), tx);

        let received: Vec<Event> = rx.iter().collect();
        assert_eq!(received.len(), 2);
        assert!(received.iter().all(|e| matches!(e, Event::Signal)));
    }

    #[test]
    fn closed_channel_stops_forwarding() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let mut calls = 0;

        forward_signals(
            || {
                calls += 1;
                Ok(Signal::SIGWINCH)
            },
            tx,
        );

        assert_eq!(calls, 1);
    }
}
