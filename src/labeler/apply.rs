//! Plan application

use super::platform::LabelPlatform;
use super::reconciler::LabelPlan;
use crate::Result;
use crate::utils::Logger;

/// Send a plan to the platform: removals one by one, then all additions at once
///
/// Stops at the first failure. Whatever was applied before it stays applied.
pub async fn apply_plan(
    platform: &dyn LabelPlatform,
    number: u64,
    plan: &LabelPlan,
    logger: &Logger,
) -> Result<()> {
    for label in plan.removes() {
        match platform.remove_label(number, label).await {
            Ok(true) => logger.info(&format!("Removed label '{}'", label)),
            Ok(false) => logger.info(&format!("Label '{}' was already gone", label)),
            Err(e) => {
                logger.error(&format!("Failed to remove label '{}': {}", label, e));
                return Err(e);
            }
        }
    }

    let adds: Vec<String> = plan.adds().into_iter().map(str::to_string).collect();
    if !adds.is_empty() {
        if let Err(e) = platform.add_labels(number, &adds).await {
            logger.error(&format!("Failed to add labels [{}]: {}", adds.join(", "), e));
            return Err(e);
        }
        logger.info(&format!("Added labels: {}", adds.join(", ")));
    }

    Ok(())
}
