use shadow_rs::BuildPattern;
use shadow_rs::ShadowBuilder;

/// Exposes build metadata as `routes::build`, used by `--version`.
fn main() -> std::io::Result<()> {
    ShadowBuilder::builder()
        .build_pattern(BuildPattern::Lazy)
        .deny_const(Default::default())
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to collect build metadata: {e}")))?;

    Ok(())
}
