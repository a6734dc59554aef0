// Dashboard runtime - one task owns the view model, everything else sends it messages
use crate::application::dashboard_service::{execute, DashboardViewModel};
use crate::application::dashboard_state::{DashboardEvent, FetchRequest};
use crate::domain::dashboard::{CategorySelection, DashboardView};
use crate::domain::pagination::PageDirection;
use anyhow::Context;
use tokio::sync::{mpsc, oneshot};

const COMMAND_BUFFER: usize = 100;

enum Command {
    Intent {
        event: DashboardEvent,
        reply: oneshot::Sender<DashboardView>,
    },
    Snapshot {
        reply: oneshot::Sender<DashboardView>,
    },
    Completed(DashboardEvent),
}

#[derive(Clone)]
pub struct DashboardHandle {
    tx: mpsc::Sender<Command>,
}

impl DashboardHandle {
    /// Moves the view model into its own task. The task ends once every
    /// handle is dropped and no fetch is outstanding.
    pub fn spawn(view_model: DashboardViewModel) -> Self {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        let completions = tx.downgrade();
        tokio::spawn(run(view_model, rx, completions));
        Self { tx }
    }

    pub async fn snapshot(&self) -> anyhow::Result<DashboardView> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Snapshot { reply })
            .await
            .context("dashboard runtime stopped")?;
        rx.await.context("dashboard runtime dropped the reply")
    }

    /// Applies a user intent and returns the view right after it. Fetches it
    /// started are still in flight; the view reports `loading` until they land.
    pub async fn send(&self, event: DashboardEvent) -> anyhow::Result<DashboardView> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Command::Intent { event, reply })
            .await
            .context("dashboard runtime stopped")?;
        rx.await.context("dashboard runtime dropped the reply")
    }

    pub async fn refresh(&self) -> anyhow::Result<DashboardView> {
        self.send(DashboardEvent::Refresh).await
    }

    pub async fn select_category(&self, selection: CategorySelection) -> anyhow::Result<DashboardView> {
        self.send(DashboardEvent::SelectCategory(selection)).await
    }

    pub async fn set_search_query(&self, text: String) -> anyhow::Result<DashboardView> {
        self.send(DashboardEvent::SetSearchQuery(text)).await
    }

    pub async fn set_brand(&self, brand: Option<String>) -> anyhow::Result<DashboardView> {
        self.send(DashboardEvent::SetBrand(brand)).await
    }

    pub async fn set_page(&self, direction: PageDirection) -> anyhow::Result<DashboardView> {
        self.send(DashboardEvent::ChangePage(direction)).await
    }
}

async fn run(
    mut view_model: DashboardViewModel,
    mut rx: mpsc::Receiver<Command>,
    completions: mpsc::WeakSender<Command>,
) {
    while let Some(command) = rx.recv().await {
        match command {
            Command::Intent { event, reply } => {
                let requests = view_model.dispatch(event);
                spawn_fetches(&view_model, requests, &completions);
                let _ = reply.send(view_model.view());
            }
            Command::Snapshot { reply } => {
                let _ = reply.send(view_model.view());
            }
            Command::Completed(event) => {
                let requests = view_model.dispatch(event);
                spawn_fetches(&view_model, requests, &completions);
            }
        }
    }

    tracing::debug!("dashboard runtime stopped");
}

fn spawn_fetches(
    view_model: &DashboardViewModel,
    requests: Vec<FetchRequest>,
    completions: &mpsc::WeakSender<Command>,
) {
    for request in requests {
        let Some(tx) = completions.upgrade() else {
            return;
        };
        let client = view_model.client();

        tokio::spawn(async move {
            let completion = execute(client, request).await;
            let _ = tx.send(Command::Completed(completion)).await;
        });
    }
}
