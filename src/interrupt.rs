//! Ctrl-C notification shared by the startup load and the shell.

use log::{info, warn};
use tokio::sync::watch;

/// Fires the paired [`Interrupt`]s.
#[derive(Debug)]
pub struct InterruptTrigger(watch::Sender<bool>);

impl InterruptTrigger {
    pub fn fire(&self) {
        let _ = self.0.send(true);
    }
}

/// Resolves once the process has been interrupted. Clones observe the same
/// signal, including one that fired before they were awaited.
#[derive(Debug, Clone)]
pub struct Interrupt {
    rx: watch::Receiver<bool>,
}

impl Interrupt {
    pub fn channel() -> (InterruptTrigger, Self) {
        let (tx, rx) = watch::channel(false);
        (InterruptTrigger(tx), Self { rx })
    }

    /// Listens for Ctrl-C for the rest of the process lifetime. Must be
    /// called from within a tokio runtime.
    pub fn ctrl_c() -> Self {
        let (trigger, interrupt) = Self::channel();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl-C");
                    trigger.fire();
                }
                Err(e) => warn!("Can't listen for Ctrl-C: {e}"),
            }
        });
        interrupt
    }

    /// Waits for the interrupt. Never resolves if the trigger is dropped
    /// without firing.
    pub async fn fired(mut self) {
        let closed = self.rx.wait_for(|fired| *fired).await.is_err();
        if closed {
            std::future::pending::<()>().await;
        }
    }
}
