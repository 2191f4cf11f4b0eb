//! # Pattern Recipe Demo
//!
//! Walks through every pattern once:
//! 1. Starts the [`PatternSystem`] (builder + composition root).
//! 2. Looks up animals through the factories, timed by a proxy.
//! 3. Picks a config parser family.
//! 4. Sends a notification over a proxied telephone sender.
//! 5. Touches the global singletons.
//! 6. Prints the collected metrics and shuts down.

use pattern_recipe::bridge::{Notification, ServerNotification, TelephoneMsgSender};
use pattern_recipe::builder::ResourcePoolConfig;
use pattern_recipe::factory::{ConfigFormat, ParserFactory, SimpleFactory};
use pattern_recipe::lifecycle::{setup_tracing, PatternSystem, SystemConfig};
use pattern_recipe::singleton::{EagerSingleton, HolderSingleton, Singleton};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    info!("Starting pattern recipe demo");

    let config = SystemConfig {
        pool: ResourcePoolConfig::builder()
            .name("demo-pool")
            .max_total(16)
            .min_total(2),
        ..SystemConfig::default()
    };
    let system = PatternSystem::start(config)?;

    // Factories, timed through the proxy
    let span = tracing::info_span!("factories");
    async {
        let simple = system.proxied(SimpleFactory);
        let registry = system.proxied(&system.factories);

        for kind in ["dog", "Cat", "parrot"] {
            match simple.call("create", |f| f.create(kind)) {
                Ok(animal) => info!(kind, %animal, "Simple factory"),
                Err(e) => warn!(kind, error = %e, "Simple factory"),
            }
        }
        for kind in ["dog", "cat", "Dog"] {
            match registry.call("create", |f| f.create(kind)) {
                Ok(animal) => info!(kind, %animal, "Factory method"),
                Err(e) => warn!(kind, error = %e, "Factory method"),
            }
        }
        if let Ok(shared) = system.animals.get("DOG") {
            info!(animal = %shared, "Cached factory");
        }
    }
    .instrument(span)
    .await;

    // Abstract factory
    for format in [ConfigFormat::Json, ConfigFormat::Xml] {
        let family = ParserFactory::for_format(format);
        info!(
            %format,
            rule = ?family.create_rule_parser(),
            system = ?family.create_system_parser(),
            "Parser family"
        );
    }

    // Bridge, with a proxied sender on the implementor side
    let span = tracing::info_span!("notification");
    async {
        let sender = system.proxied(TelephoneMsgSender::new(vec![
            "555-0100".to_string(),
            "555-0101".to_string(),
        ]));
        let notification = ServerNotification::new(sender);
        notification.notify("pool config loaded").await;
    }
    .instrument(span)
    .await;

    // Global singletons, for comparison with the composition root above
    info!(
        same = std::ptr::eq(Singleton::instance(), Singleton::instance()),
        builds = Singleton::construction_count(),
        "Double-checked singleton"
    );
    let _ = (HolderSingleton::instance(), EagerSingleton::instance());
    info!(
        holder_builds = HolderSingleton::construction_count(),
        eager_builds = EagerSingleton::construction_count(),
        "Other singletons"
    );

    let snapshot = system.metrics.snapshot().await?;
    for (api, stats) in &snapshot.apis {
        info!(api = %api, calls = stats.calls, total = ?stats.total, max = ?stats.max, "Metrics");
    }

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
