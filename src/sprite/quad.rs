use crate::{
    color::Color,
    math::{self, Point, Raw, Unknown},
    sprite::{FlipFlags, SourceRect, SpriteTransform, Vertex, VERTICES_PER_QUAD},
};

/// Computes the four vertices of a sprite, clockwise from the top left of the
/// source rectangle.
///
/// Flipping negates the corresponding scale component before anything else,
/// so a flipped sprite mirrors around its origin and rotates in the mirrored
/// frame. Texture coordinates are always the unflipped corners of `source`.
#[must_use]
pub fn compute_quad(
    transform: &SpriteTransform,
    source: &SourceRect,
    color: Color,
    flip: FlipFlags,
) -> [Vertex; VERTICES_PER_QUAD] {
    let scale = flip.apply(transform.scale);
    let width = source.width * scale.x;
    let height = source.height * scale.y;
    let (sin, cos) = transform.rotation.radians.sin_cos();

    // Each corner is offset from the previous one rather than from the origin.
    let mut corner = Point::<f32, Unknown>::new(
        -transform.origin.x * scale.x,
        -transform.origin.y * scale.y,
    );
    let mut local = [corner; VERTICES_PER_QUAD];
    corner.x += width;
    local[1] = corner;
    corner.y += height;
    local[2] = corner;
    corner.x -= width;
    local[3] = corner;

    let offset = transform.position.to_vector();
    let mut vertices = [Vertex::default(); VERTICES_PER_QUAD];
    for ((vertex, local), uv) in vertices.iter_mut().zip(local).zip(source.corners()) {
        let world = math::rotate(local, sin, cos).cast_unit::<Raw>() + offset;
        *vertex = Vertex::new(world, uv, color);
    }
    vertices
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Vector;

    fn positions(vertices: &[Vertex; 4]) -> [[f32; 2]; 4] {
        [
            vertices[0].position,
            vertices[1].position,
            vertices[2].position,
            vertices[3].position,
        ]
    }

    fn assert_positions_eq(vertices: &[Vertex; 4], expected: [[f32; 2]; 4]) {
        for (vertex, expected) in vertices.iter().zip(expected.iter()) {
            assert_relative_eq!(vertex.position[0], expected[0], epsilon = 1e-4);
            assert_relative_eq!(vertex.position[1], expected[1], epsilon = 1e-4);
        }
    }

    #[test]
    fn axis_aligned_quad_is_exact() {
        let quad = compute_quad(
            &SpriteTransform::at(Point::new(10., 20.)),
            &SourceRect::new(0., 0., 32., 32.),
            Color::WHITE,
            FlipFlags::empty(),
        );
        assert_eq!(
            positions(&quad),
            [[10., 20.], [42., 20.], [42., 52.], [10., 52.]]
        );
    }

    #[test]
    fn horizontal_flip_mirrors_geometry_only() {
        let source = SourceRect::new(0., 0., 32., 32.);
        let quad = compute_quad(
            &SpriteTransform::at(Point::new(10., 20.)),
            &source,
            Color::WHITE,
            FlipFlags::HORIZONTAL,
        );
        assert_eq!(
            positions(&quad),
            [[10., 20.], [-22., 20.], [-22., 52.], [10., 52.]]
        );
        let uvs = [quad[0].uv, quad[1].uv, quad[2].uv, quad[3].uv];
        assert_eq!(uvs, source.corners());
    }

    #[test]
    fn vertical_flip_mirrors_downward_edge() {
        let quad = compute_quad(
            &SpriteTransform::at(Point::new(0., 100.)),
            &SourceRect::new(0., 0., 16., 8.),
            Color::WHITE,
            FlipFlags::VERTICAL,
        );
        assert_eq!(
            positions(&quad),
            [[0., 100.], [16., 100.], [16., 92.], [0., 92.]]
        );
    }

    #[test]
    fn origin_is_placed_at_position() {
        let quad = compute_quad(
            &SpriteTransform::at(Point::new(100., 100.)).with_origin(Point::new(16., 16.)),
            &SourceRect::new(0., 0., 32., 32.),
            Color::WHITE,
            FlipFlags::empty(),
        );
        assert_eq!(
            positions(&quad),
            [[84., 84.], [116., 84.], [116., 116.], [84., 116.]]
        );
    }

    #[test]
    fn scale_stretches_from_origin() {
        let quad = compute_quad(
            &SpriteTransform::at(Point::new(0., 0.))
                .with_origin(Point::new(8., 0.))
                .with_scale(Vector::new(2., 3.)),
            &SourceRect::new(0., 0., 16., 16.),
            Color::WHITE,
            FlipFlags::empty(),
        );
        assert_eq!(
            positions(&quad),
            [[-16., 0.], [16., 0.], [16., 48.], [-16., 48.]]
        );
    }

    #[test]
    fn quarter_turn_about_center() {
        let quad = compute_quad(
            &SpriteTransform::at(Point::new(50., 50.))
                .with_origin(Point::new(5., 5.))
                .with_rotation_degrees(90.),
            &SourceRect::new(0., 0., 10., 10.),
            Color::WHITE,
            FlipFlags::empty(),
        );
        // (x, y) rotates to (-y, x) before translation.
        assert_positions_eq(&quad, [[55., 45.], [55., 55.], [45., 55.], [45., 45.]]);
    }

    #[test]
    fn flip_combines_with_rotation_through_scale() {
        let transform = SpriteTransform::at(Point::new(0., 0.)).with_rotation_degrees(90.);
        let source = SourceRect::new(0., 0., 10., 20.);
        let flipped = compute_quad(&transform, &source, Color::WHITE, FlipFlags::HORIZONTAL);
        let negative_scale = compute_quad(
            &transform.with_scale(Vector::new(-1., 1.)),
            &source,
            Color::WHITE,
            FlipFlags::empty(),
        );
        assert_eq!(flipped, negative_scale);
        // Local top right (-10, 0) rotates to (0, -10).
        assert_positions_eq(&flipped, [[0., 0.], [0., -10.], [-20., -10.], [-20., 0.]]);
    }

    #[test]
    fn rotation_preserves_edge_lengths() {
        let quad = compute_quad(
            &SpriteTransform::at(Point::new(3., 7.))
                .with_origin(Point::new(4., 2.))
                .with_scale(Vector::new(1.5, 0.5))
                .with_rotation_degrees(33.),
            &SourceRect::new(0., 0., 40., 12.),
            Color::WHITE,
            FlipFlags::empty(),
        );
        let top = quad[0].point().distance_to(quad[1].point());
        let right = quad[1].point().distance_to(quad[2].point());
        assert_relative_eq!(top, 60., epsilon = 1e-3);
        assert_relative_eq!(right, 6., epsilon = 1e-3);
        // The origin still lands on the position.
        let pivot = quad[0].point().lerp(quad[1].point(), 4. / 40.);
        let pivot = pivot + (quad[3].point() - quad[0].point()) * (2. / 12.);
        assert_relative_eq!(pivot.x, 3., epsilon = 1e-3);
        assert_relative_eq!(pivot.y, 7., epsilon = 1e-3);
    }

    #[test]
    fn color_is_copied_to_every_corner() {
        let color = Color::new(0.1, 0.2, 0.3, 0.4);
        let quad = compute_quad(
            &SpriteTransform::default(),
            &SourceRect::new(4., 4., 8., 8.),
            color,
            FlipFlags::BOTH,
        );
        assert!(quad.iter().all(|vertex| vertex.color == color.rgba()));
    }
}
