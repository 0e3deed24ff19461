//! # Self Link Demo
//!
//! Wires a provider from the environment, resolves self links for a few profiles in
//! parallel tasks and shows the error for an unregistered type.
//!
//! ```bash
//! SELF_LINK_BASE_URI=https://api.example.com RUST_LOG=debug cargo run
//! ```

use std::sync::Arc;

use self_link::config::LinkConfig;
use self_link::lookup::EntityLookups;
use self_link::mapping::{MappingContext, PersistentEntities};
use self_link::model::Profile;
use self_link::runtime::{default_provider, setup_tracing};
use self_link::support::{SelfLinkProvider, SelfLinkProviderExt};
use tracing::{error, info, Instrument};

struct Unregistered;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = LinkConfig::from_env();
    info!(base_uri = %config.base_uri, rel = %config.self_rel, "Starting self-link demo");

    let mut context = MappingContext::new();
    context.add_entity::<Profile>();
    let provider: Arc<dyn SelfLinkProvider> = Arc::new(default_provider(
        PersistentEntities::from(context),
        EntityLookups::empty(),
        config,
    ));

    let mut handles = Vec::new();
    for name in ["Alice", "Bob", "Carol"] {
        let provider = provider.clone();
        let span = tracing::info_span!("profile", name);
        handles.push(tokio::spawn(
            async move {
                let profile = Profile::new(name, "user");
                provider.create_self_link_for(&profile)
            }
            .instrument(span),
        ));
    }

    for handle in handles {
        let link = handle
            .await
            .map_err(|e| e.to_string())?
            .map_err(|e| e.to_string())?;
        info!(href = link.href(), rel = link.rel(), "Resolved");
    }

    match provider.create_self_link_for(&Unregistered) {
        Ok(link) => info!(href = link.href(), "Unexpected link"),
        Err(e) => error!(error = %e, "Expected failure for unregistered type"),
    }

    info!("Demo completed");
    Ok(())
}
