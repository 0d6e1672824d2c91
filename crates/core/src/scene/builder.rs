use tracing::debug;

use super::layout::{self, Parts};
use super::node::SceneTree;
use crate::model::ModalityId;
use crate::session::SceneKey;

/// Builds the apparatus for `key`.
///
/// The result depends only on the key: the same key always yields an equal
/// tree, with every node at its base pose.
#[must_use]
pub fn build_scene(key: SceneKey) -> SceneTree {
    let parts = Parts {
        highlight: key.highlight,
        animating: key.animating,
    };
    let nodes = match key.modality {
        ModalityId::Mri => layout::mri::build(&parts),
        ModalityId::Ct => layout::ct::build(&parts),
        ModalityId::Xray => layout::xray::build(&parts),
        ModalityId::Ultrasound => layout::ultrasound::build(&parts),
        ModalityId::Pet => layout::pet::build(&parts),
    };
    let tree = SceneTree::new(key, nodes);
    debug!(
        modality = %key.modality,
        highlight = ?key.highlight,
        animating = key.animating,
        shapes = tree.shape_count(),
        "built scene"
    );
    tree
}
