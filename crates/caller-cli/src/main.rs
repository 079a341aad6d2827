mod config;
mod envelope;
mod router;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::Parser;
use env_logger::Env;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, mpsc};

use crate::config::Config;
use crate::envelope::Envelope;
use crate::router::Router;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Greeting {
    name: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct OrderPlaced {
    order_id: u64,
    amount_cents: u64,
    placed_at: DateTime<Utc>,
}

fn greet(g: Greeting) {
    println!("Hello, {}!", g.name);
}

fn record_order(o: OrderPlaced) {
    println!(
        "order {} placed at {} for {}.{:02}",
        o.order_id,
        o.placed_at.to_rfc3339(),
        o.amount_cents / 100,
        o.amount_cents % 100
    );
}

/// worker：queue と router をつなぐ接着剤
async fn worker_loop(worker_id: usize, queue: Arc<Mutex<mpsc::Receiver<Envelope>>>, router: Arc<Router>) {
    loop {
        // 受信側は worker 間で共有しているので、1 件取ったらすぐロックを手放す
        let next = queue.lock().await.recv().await;
        let Some(envelope) = next else {
            break;
        };

        match router.dispatch(&envelope) {
            Ok(()) => info!(
                "[worker-{worker_id}] handled id={} topic={} queued_for={}ms",
                envelope.id,
                envelope.topic,
                (Utc::now() - envelope.enqueued_at).num_milliseconds()
            ),
            Err(e) => warn!(
                "[worker-{worker_id}] dispatch failed id={} topic={}: {e}",
                envelope.id, envelope.topic
            ),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    // (A) topic ごとに Caller を登録
    let mut router = Router::new();
    router.register("user.greeted", greet)?;
    router.register("order.placed", record_order)?;
    info!("{} routes: {:?}", router.len(), router.topics());
    let router = Arc::new(router);

    // (B) worker を起動
    let (tx, rx) = mpsc::channel::<Envelope>(usize::from(config.queue_capacity));
    let rx = Arc::new(Mutex::new(rx));
    let workers: Vec<_> = (0..usize::from(config.workers))
        .map(|id| tokio::spawn(worker_loop(id, rx.clone(), router.clone())))
        .collect();

    // (C) メッセージ投入（最後の 2 件は壊れた payload と未登録 topic）
    let messages = vec![
        Envelope::json("user.greeted", &Greeting { name: "caller".to_string() })?,
        Envelope::json(
            "order.placed",
            &OrderPlaced {
                order_id: 1001,
                amount_cents: 4250,
                placed_at: Utc::now(),
            },
        )?,
        Envelope::new("order.placed", b"{".to_vec()),
        Envelope::new("invoice.sent", b"{}".to_vec()),
    ];
    for envelope in messages {
        info!("enqueued id={} topic={}", envelope.id, envelope.topic);
        tx.send(envelope).await?;
    }

    // (D) 送信側を閉じて、queue が空になるまで待つ
    drop(tx);
    for worker in workers {
        worker.await?;
    }
    Ok(())
}
