use glam::Vec4;
use crate::renderer::mock_renderer::{MockCall, MockRenderer};
use super::*;

fn create_test_context() -> CameraContext {
    CameraContext::new(1024.0, 768.0, 60.0, 1.0, 10000.0)
}

fn create_graph() -> (FrameGraph, FrameId) {
    let mut graph = FrameGraph::new();
    let root = graph.create_frame(None, "root", false);
    (graph, root)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_context() {
    let ctx = create_test_context();

    assert_eq!(ctx.width(), 1024.0);
    assert_eq!(ctx.height(), 768.0);
    assert_eq!(ctx.fov(), 60.0);
    assert_eq!(ctx.z_near(), 1.0);
    assert_eq!(ctx.z_far(), 10000.0);
    assert!(ctx.frame().is_none());
    assert!(ctx.camera_frame().is_none());
    assert_eq!(ctx.position(), DVec3::ZERO);
}

#[test]
fn test_fov_factor() {
    let ctx = CameraContext::new(800.0, 800.0, 90.0, 1.0, 100.0);
    // 2·tan(45°) = 2
    assert!((ctx.fov_factor() - 2.0).abs() < 1e-12);
}

// ============================================================================
// begin_frame / end_frame
// ============================================================================

#[test]
fn test_begin_frame_creates_camera_frame() {
    let (mut graph, root) = create_graph();
    let mut ctx = create_test_context();
    ctx.set_frame(Some(root));
    ctx.set_position(DVec3::new(1.0, 2.0, 3.0));
    ctx.set_orient(DMat3::from_rotation_y(0.5));

    ctx.begin_frame(&mut graph, 0.0);

    let cam = ctx.camera_frame().unwrap();
    let frame = graph.frame(cam).unwrap();
    assert!(frame.is_camera_frame());
    assert_eq!(frame.parent(), Some(root));
    assert_eq!(frame.position(), DVec3::new(1.0, 2.0, 3.0));
    // Interpolated pose is usable immediately
    assert_eq!(frame.interp_position(), frame.position());
    assert_eq!(frame.interp_orient(), frame.orient());

    ctx.end_frame(&mut graph);
}

#[test]
fn test_end_frame_removes_camera_frame() {
    let (mut graph, root) = create_graph();
    let mut ctx = create_test_context();
    ctx.set_frame(Some(root));

    ctx.begin_frame(&mut graph, 0.0);
    let cam = ctx.camera_frame().unwrap();
    ctx.end_frame(&mut graph);

    assert!(ctx.camera_frame().is_none());
    assert!(!graph.contains(cam));
    assert!(graph.children(root).is_empty());
}

#[test]
fn test_begin_after_end_succeeds() {
    let (mut graph, root) = create_graph();
    let mut ctx = create_test_context();
    ctx.set_frame(Some(root));

    for _ in 0..3 {
        ctx.begin_frame(&mut graph, 0.0);
        ctx.end_frame(&mut graph);
    }

    assert_eq!(graph.len(), 1);
}

#[test]
#[should_panic(expected = "camera frame already active")]
fn test_double_begin_panics() {
    let (mut graph, root) = create_graph();
    let mut ctx = create_test_context();
    ctx.set_frame(Some(root));

    ctx.begin_frame(&mut graph, 0.0);
    ctx.begin_frame(&mut graph, 0.0);
}

#[test]
#[should_panic(expected = "no active camera frame")]
fn test_end_without_begin_panics() {
    let (mut graph, _root) = create_graph();
    let mut ctx = create_test_context();
    ctx.end_frame(&mut graph);
}

#[test]
#[should_panic(expected = "no reference frame attached")]
fn test_begin_without_frame_panics() {
    let (mut graph, _root) = create_graph();
    let mut ctx = create_test_context();
    ctx.begin_frame(&mut graph, 0.0);
}

#[test]
fn test_drop_with_active_frame_queues_release() {
    let (mut graph, root) = create_graph();
    let cam = {
        let mut ctx = create_test_context();
        ctx.set_frame(Some(root));
        ctx.begin_frame(&mut graph, 0.0);
        ctx.camera_frame().unwrap()
    };

    assert_eq!(graph.release_queue().pending_count(), 1);
    assert_eq!(graph.purge_released(), 1);
    assert!(!graph.contains(cam));
}

#[test]
fn test_dropped_frame_listed_until_next_camera_frame() {
    let (mut graph, root) = create_graph();
    let leaked = {
        let mut ctx = create_test_context();
        ctx.set_frame(Some(root));
        ctx.begin_frame(&mut graph, 0.0);
        ctx.camera_frame().unwrap()
    };
    assert!(graph.children(root).contains(&leaked));

    let mut ctx = create_test_context();
    ctx.set_frame(Some(root));
    ctx.begin_frame(&mut graph, 0.0);
    ctx.end_frame(&mut graph);

    assert!(!graph.contains(leaked));
    assert!(graph.children(root).is_empty());
}

#[test]
fn test_drop_without_active_frame_is_silent() {
    let (mut graph, root) = create_graph();
    {
        let mut ctx = create_test_context();
        ctx.set_frame(Some(root));
        ctx.begin_frame(&mut graph, 0.0);
        ctx.end_frame(&mut graph);
    }

    assert_eq!(graph.release_queue().pending_count(), 0);
}

// ============================================================================
// apply_draw_transforms
// ============================================================================

#[test]
fn test_apply_draw_transforms() {
    let ctx = create_test_context();
    let mut renderer = MockRenderer::new();

    ctx.apply_draw_transforms(&mut renderer);

    assert_eq!(renderer.calls.len(), 2);
    assert!(matches!(renderer.calls[0], MockCall::SetProjection(_)));
    assert_eq!(renderer.calls[1], MockCall::SetTransform(Mat4::IDENTITY));

    // Infinite projection: no far plane, points far away stay in front
    let clip = renderer.projection * Vec4::new(0.0, 0.0, -1.0e8, 1.0);
    assert!(clip.w > 0.0);
    assert!(clip.z / clip.w <= 1.0);
}
