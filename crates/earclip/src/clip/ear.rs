//! The ear-clipping scan and its validity predicate.

use crate::geom::{cross, winding_of, Triangle};

use super::types::{ClipCfg, NonTriangulable, VertexId, VertexLoop};

/// Triangulate the outline by repeated ear clipping.
///
/// The outline's winding is classified once up front and used as a constant
/// for the whole run. On success every vertex has been consumed into a
/// triangle and the outline is left empty (leftover loops of 1-2 vertices
/// cannot form a triangle and are discarded with it). On failure the outline
/// is untouched. Outlines with fewer than three vertices triangulate to
/// nothing; that is a no-op, not an error.
///
/// Triangles come back in clip order, which is a pure function of the input
/// sequence: identical outlines produce identical triangle lists.
pub fn triangulate(
    outline: &mut VertexLoop,
    cfg: ClipCfg,
) -> Result<Vec<Triangle>, NonTriangulable> {
    if outline.len() < 3 {
        return Ok(Vec::new());
    }
    let clockwise = winding_of(&outline.points()).is_clockwise();

    // The scan works on a local copy of the ring; the outline commits only
    // once the whole run has succeeded, keeping the failure path untouched.
    let mut ring: Vec<VertexId> = outline.ring().to_vec();
    let mut triangles: Vec<Triangle> = Vec::with_capacity(ring.len() - 2);
    let mut index = 0usize;
    let mut rejected = 0usize;

    while ring.len() > 2 {
        let i1 = index % ring.len();
        let i2 = (index + 1) % ring.len();
        let i3 = (index + 2) % ring.len();
        let (id1, id2, id3) = (ring[i1], ring[i2], ring[i3]);
        let p1 = outline.position(id1);
        let p2 = outline.position(id2);
        let p3 = outline.position(id3);

        let turn = cross(p2 - p1, p3 - p1);
        // The acceptance sign pairs with the >= 0 tie-break in `winding_of`;
        // both comparisons are inclusive so collinear triples still clip.
        let convex = if clockwise { turn <= 0.0 } else { turn >= 0.0 };

        let triangle = Triangle::new(p1, p2, p3);
        if convex && is_valid_ear(&triangle, [id1, id2, id3], &ring, outline) {
            // Consume the middle vertex and retest from the same cursor
            // against the now-shorter ring.
            ring.remove(i2);
            triangles.push(triangle);
            rejected = 0;
        } else {
            index += 1;
            rejected += 1;
            if rejected > cfg.attempt_factor * ring.len() {
                return Err(NonTriangulable {
                    remaining: ring.len(),
                });
            }
        }
    }

    outline.clear();
    Ok(triangles)
}

/// Is the candidate triangle an admissible ear of the current ring?
///
/// Every ring vertex other than the three corners must fall outside the
/// triangle (boundary counts as inside, so a vertex sitting exactly on an
/// edge blocks the ear). Corners are skipped by id, not by position: a
/// distinct vertex that merely shares a corner's coordinates still blocks.
pub fn is_valid_ear(
    triangle: &Triangle,
    corners: [VertexId; 3],
    ring: &[VertexId],
    outline: &VertexLoop,
) -> bool {
    ring.iter()
        .all(|&id| corners.contains(&id) || !triangle.contains(outline.position(id)))
}
