use crate::host::HostBody;
use crate::types::{BodyPoint, TrackerDevice};
use glam::Vec3;

/// Leading entries of the host's device list reserved for the HMD and
/// hand controllers; tracking pucks begin after them.
pub const RESERVED_DEVICES: usize = 2;

/// Body points a tracker can be assigned to, in tie-break order.
const LINKED_POINTS: [BodyPoint; 2] = [BodyPoint::Hips, BodyPoint::Chest];

/// Find the body point whose skeleton bone is nearest to `position`.
///
/// Greedy and independent per tracker: candidates without a resolvable
/// bone pose are skipped, an exact distance tie keeps the earlier
/// candidate. `None` when no candidate bone resolves at all. Pure given
/// the host's current bone poses.
pub fn nearest_body_point(position: Vec3, host: &impl HostBody) -> Option<BodyPoint> {
    let mut nearest = None;
    let mut nearest_distance = f32::MAX;
    for point in LINKED_POINTS {
        let Some(bone) = host.bone_pose(point) else {
            continue;
        };
        let distance = bone.position.distance(position);
        if distance < nearest_distance {
            nearest_distance = distance;
            nearest = Some(point);
        }
    }
    nearest
}

/// Scan the tracking pucks for one assigned to `target`.
///
/// Pucks past the reserved prefix are each resolved to their nearest
/// bone; among pucks resolving to `target` the last found wins. Two
/// pucks may resolve to the same bone and a bone may stay unclaimed;
/// there is deliberately no global matching here. An empty or
/// reserved-only device list yields `None` so the caller falls back to
/// skeleton bones.
pub fn find_tracker(
    devices: &[TrackerDevice],
    target: BodyPoint,
    host: &impl HostBody,
) -> Option<TrackerDevice> {
    let mut found = None;
    for device in devices.iter().skip(RESERVED_DEVICES) {
        if nearest_body_point(device.pose.position, host) == Some(target) {
            found = Some(*device);
        }
    }
    found
}
