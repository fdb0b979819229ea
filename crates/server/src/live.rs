// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Live tracking stream for dispatcher screens.
//!
//! Events describe changes that already happened. They are informational
//! only; clients read authoritative state over HTTP. Nothing sent by a
//! client over the socket is acted on.

use axum::{
    extract::{
        State as AxumState, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use futures::{SinkExt, stream::StreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

/// Events buffered per subscriber before the slowest ones start lagging.
const EVENT_BUFFER_SIZE: usize = 256;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveEvent {
    OrderCreated {
        order_id: String,
    },
    OrderAssigned {
        order_id: String,
        vehicle_id: String,
        driver_id: String,
    },
    OrderDispatched {
        order_id: String,
        delivery_id: String,
    },
    OrderCancelled {
        order_id: String,
    },
    DeliveryProgress {
        delivery_id: String,
        progress: u8,
        lat: f64,
        lng: f64,
    },
    /// The delivery reached 100% and its order is delivered.
    DeliveryCompleted {
        delivery_id: String,
        order_id: String,
    },
    AlertRaised {
        delivery_id: String,
        alert_id: u64,
        severity: String,
        /// Delivery status after the alert.
        status: String,
    },
    AlertResolved {
        delivery_id: String,
        alert_id: u64,
        status: String,
    },
    StockChanged {
        item_id: u32,
        batch_id: String,
        /// `None` once the item is deleted.
        status: Option<String>,
    },
    /// A vehicle or driver changed availability outside an order.
    FleetChanged {
        resource_id: String,
        status: String,
    },
    /// Sent once, right after the socket opens.
    Connected {
        /// Server timestamp (ISO 8601).
        timestamp: String,
    },
}

/// Fans live events out to every connected socket.
#[derive(Debug, Clone)]
pub struct LiveEventBroadcaster {
    tx: broadcast::Sender<LiveEvent>,
}

impl LiveEventBroadcaster {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Sends an event without waiting for anyone to read it. With no
    /// subscribers the event is dropped.
    pub fn broadcast(&self, event: LiveEvent) {
        match self.tx.send(event) {
            Ok(receivers) => debug!(receivers, "Broadcast live event"),
            Err(_) => debug!("No receivers for live event"),
        }
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<LiveEvent> {
        self.tx.subscribe()
    }
}

impl Default for LiveEventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Handler for GET `/live`.
///
/// Upgrades the connection and streams every event broadcast after the
/// upgrade.
pub async fn live_events_handler(
    ws: WebSocketUpgrade,
    AxumState(broadcaster): AxumState<Arc<LiveEventBroadcaster>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, broadcaster))
}

async fn handle_socket(socket: WebSocket, broadcaster: Arc<LiveEventBroadcaster>) {
    info!("Client connected to live tracking stream");

    let (mut sender, mut receiver) = socket.split();
    let mut rx: broadcast::Receiver<LiveEvent> = broadcaster.subscribe();

    let connected_event = LiveEvent::Connected {
        timestamp: depot_api::format_timestamp(time::OffsetDateTime::now_utc()),
    };

    if let Ok(json) = serde_json::to_string(&connected_event)
        && sender.send(Message::Text(json.into())).await.is_err()
    {
        warn!("Failed to send connection confirmation");
        return;
    }

    let mut send_task = tokio::spawn(async move {
        loop {
            let event: LiveEvent = match rx.recv().await {
                Ok(event) => event,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Live client fell behind, events skipped");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => break,
            };
            match serde_json::to_string(&event) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => error!(?e, "Failed to serialize live event"),
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Text(_) | Message::Binary(_)) => {
                    warn!("Ignoring message from live client");
                }
                Ok(Message::Close(_)) => {
                    debug!("Client sent close frame");
                    break;
                }
                Ok(Message::Ping(_) | Message::Pong(_)) => {}
                Err(e) => {
                    error!(?e, "WebSocket receive error");
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    info!("Client disconnected from live tracking stream");
}
