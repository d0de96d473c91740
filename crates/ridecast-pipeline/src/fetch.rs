//! Shared fetch-filter-sort step for both workflows.

use ridecast_core::constants::FETCH_PAD_DAYS;
use ridecast_core::error::{Error, Result};
use ridecast_core::traits::FeatureStore;
use ridecast_core::types::{FeatureView, PickupHour};
use ridecast_features::frame::TsFrame;

/// Fetch `[from, to]` from a view, padding the store read by a day on
/// each side, then filtering strictly back to the intended window and
/// sorting. Errors with `NoData` when nothing survives the filter.
pub(crate) fn fetch_frame(
    store: &dyn FeatureStore,
    view: &FeatureView,
    from: PickupHour,
    to: PickupHour,
) -> Result<TsFrame> {
    let rows = store.fetch(view, from.sub_days(FETCH_PAD_DAYS), to.add_days(FETCH_PAD_DAYS))?;
    tracing::info!(
        "Fetched {} rows from {} for [{} .. {}]",
        rows.len(),
        view,
        from,
        to
    );

    let frame = TsFrame::from_records(rows).filter_between(from, to);
    if frame.is_empty() {
        return Err(Error::NoData(format!(
            "no rows in {view} between {from} and {to}"
        )));
    }

    let gaps = frame.gap_count();
    if gaps > 0 {
        tracing::warn!(
            "{} missing hours across {} locations; windows slide positionally over gaps",
            gaps,
            frame.num_locations()
        );
    }

    Ok(frame)
}
