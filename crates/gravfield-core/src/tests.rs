#[cfg(test)]
mod tests {
    use glam::{DVec2, Vec2};

    use crate::error::SimError;
    use crate::mesh::{circle_vertices, square_vertices, MeshArena, MeshHandle};
    use crate::object::{GameObjectId, ObjectStore};
    use crate::render::MeshFactory;
    use crate::state::{BodyView, ConservationView, FrameSnapshot};
    use crate::types::{Color, RigidBody2D, SimTime, Transform2D};

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-6
    }

    // ---- Mesh builders ----

    #[test]
    fn test_circle_four_sides() {
        let v = circle_vertices(4).unwrap();
        assert_eq!(v.len(), 12, "4 triangles x 3 vertices");
        assert!(close(v[0], Vec2::new(1.0, 0.0)), "v0 = {:?}", v[0]);
        assert!(close(v[1], Vec2::new(0.0, 1.0)), "v1 = {:?}", v[1]);
        assert_eq!(v[2], Vec2::ZERO);

        // Last triangle wraps back to the first rim point.
        assert!(close(v[9], Vec2::new(0.0, -1.0)));
        assert!(close(v[10], Vec2::new(1.0, 0.0)));
        assert_eq!(v[11], Vec2::ZERO);
    }

    #[test]
    fn test_circle_is_deterministic() {
        assert_eq!(circle_vertices(64).unwrap(), circle_vertices(64).unwrap());
    }

    #[test]
    fn test_circle_rim_on_unit_circle() {
        let v = circle_vertices(64).unwrap();
        assert_eq!(v.len(), 64 * 3);
        for tri in v.chunks(3) {
            assert!((tri[0].length() - 1.0).abs() < 1e-5);
            assert!((tri[1].length() - 1.0).abs() < 1e-5);
            assert_eq!(tri[2], Vec2::ZERO);
        }
    }

    #[test]
    fn test_circle_rejects_degenerate() {
        assert_eq!(
            circle_vertices(2),
            Err(SimError::TooFewSides { got: 2, min: 3 })
        );
        assert!(circle_vertices(0).is_err());
        assert_eq!(circle_vertices(3).unwrap().len(), 9);
    }

    #[test]
    fn test_square_centered() {
        let v = square_vertices(Vec2::ZERO);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0], Vec2::new(-0.5, -0.5));
        assert_eq!(v[1], Vec2::new(0.5, 0.5));
        assert_eq!(v[2], Vec2::new(-0.5, 0.5));
        assert_eq!(v[3], Vec2::new(-0.5, -0.5));
        assert_eq!(v[4], Vec2::new(0.5, -0.5));
        assert_eq!(v[5], Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_square_offset_pivots_at_edge() {
        let v = square_vertices(Vec2::new(0.5, 0.0));
        let min_x = v.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
        let max_x = v.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
        assert_eq!(min_x, 0.0);
        assert_eq!(max_x, 1.0);
    }

    // ---- Mesh arena ----

    #[test]
    fn test_arena_hands_out_sequential_handles() {
        let mut arena = MeshArena::new();
        assert!(arena.is_empty());
        let square = arena.create(&square_vertices(Vec2::ZERO));
        let circle = arena.create(&circle_vertices(8).unwrap());
        assert_eq!(square, MeshHandle(0));
        assert_eq!(circle, MeshHandle(1));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(square).unwrap().len(), 6);
        assert_eq!(arena.get(circle).unwrap().len(), 24);
        assert!(arena.get(MeshHandle(2)).is_none());
    }

    #[test]
    fn test_arena_handle_is_position() {
        let mut arena = MeshArena::new();
        for expected in 0..300usize {
            let handle = arena.create(&square_vertices(Vec2::ZERO));
            assert_eq!(handle, MeshHandle(expected));
            assert_eq!(handle.0 + 1, arena.len());
        }
        assert!(arena.get(MeshHandle(usize::MAX)).is_none());
    }

    // ---- Entities ----

    #[test]
    fn test_draw_item_mirrors_object() {
        let mut store = ObjectStore::new();
        let mut obj = store.create(MeshHandle(3));
        obj.transform = Transform2D {
            translation: DVec2::new(0.25, -0.5),
            scale: DVec2::new(0.02, 0.005),
            rotation: 1.0,
        };
        obj.color = Color::RED;

        let item = obj.draw_item();
        assert_eq!(item.transform, obj.transform);
        assert_eq!(item.color, Color::RED);
        assert_eq!(item.mesh, MeshHandle(3));
    }

    #[test]
    fn test_new_object_defaults() {
        let mut store = ObjectStore::new();
        let obj = store.create(MeshHandle(0));
        assert_eq!(obj.transform, Transform2D::default());
        assert_eq!(obj.color, Color::WHITE);
        assert_eq!(obj.rigid_body.mass(), 1.0);
        assert_eq!(obj.rigid_body.velocity, DVec2::ZERO);
    }

    #[test]
    fn test_momentum() {
        let body = RigidBody2D::new(2.0, DVec2::new(1.5, -0.5)).unwrap();
        assert_eq!(body.momentum(), DVec2::new(3.0, -1.0));
    }

    // ---- Serde ----

    #[test]
    fn test_snapshot_serde() {
        let snap = FrameSnapshot {
            time: SimTime {
                frame: 3,
                elapsed_secs: 0.05,
            },
            bodies: vec![BodyView {
                id: GameObjectId(1),
                position: DVec2::new(0.5, 0.5),
                velocity: DVec2::new(-0.5, 0.0),
                mass: 1.0,
                color: Color::RED,
            }],
            conservation: ConservationView {
                momentum: DVec2::ZERO,
                kinetic_energy: 0.25,
                potential_energy: -0.75,
                center_of_mass: Some(DVec2::new(0.5, 0.5)),
            },
            ..Default::default()
        };

        let json = serde_json::to_string(&snap).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.time, snap.time);
        assert_eq!(back.bodies.len(), 1);
        assert_eq!(back.bodies[0].id, GameObjectId(1));
        assert_eq!(back.bodies[0].position, DVec2::new(0.5, 0.5));
        assert!((back.conservation.total_energy() + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_transform_serde() {
        let t = Transform2D {
            translation: DVec2::new(1.0, 2.0),
            scale: DVec2::new(0.5, 0.25),
            rotation: -0.3,
        };
        let json = serde_json::to_string(&t).unwrap();
        let back: Transform2D = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
