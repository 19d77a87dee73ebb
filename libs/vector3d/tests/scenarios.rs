use vector3d::{format, Vector3D};

#[test]
fn vector_addition() {
    let a = Vector3D::new(1.0, 2.0, 3.0);
    let b = Vector3D::new(4.0, 5.0, 6.0);
    let c = a + b;
    assert_eq!(c.x, 5.0);
    assert_eq!(c.y, 7.0);
    assert_eq!(c.z, 9.0);
}

#[test]
fn vector_subtraction() {
    let a = Vector3D::new(1.0, 2.0, 3.0);
    let b = Vector3D::new(4.0, 5.0, 6.0);
    let c = a - b;
    assert_eq!((c.x, c.y, c.z), (-3.0, -3.0, -3.0));
}

#[test]
fn cross_product() {
    let a = Vector3D::new(1.0, 2.0, 3.0);
    let b = Vector3D::new(4.0, 5.0, 6.0);
    let c = a * b;
    assert_eq!((c.x, c.y, c.z), (-3.0, 6.0, -3.0));
}

#[test]
fn dot_product() {
    let a = Vector3D::new(1.0, 2.0, 3.0);
    let b = Vector3D::new(4.0, 5.0, 6.0);
    let c: i32 = a % b;
    assert_eq!(c, 32);
}

#[test]
fn magnitude() {
    let a = Vector3D::new(1.0, 0.0, 0.0);
    assert_eq!(a.magnitude(), 1.0);

    let b = Vector3D::new(4.0, 3.0, 0.0);
    assert_eq!(b.magnitude(), 5.0);
}

#[test]
fn scalar_addition() {
    let a = Vector3D::new(1.0, 2.0, 3.0);
    let b = a + 2.0;
    assert_eq!((b.x, b.y, b.z), (3.0, 4.0, 5.0));
}

#[test]
fn scalar_multiplication() {
    let a = Vector3D::new(1.0, 2.0, 3.0);
    let b = a * 2.0;
    assert_eq!((b.x, b.y, b.z), (2.0, 4.0, 6.0));
}

#[test]
fn formatting() {
    let a = Vector3D::new(1.0, 2.0, 3.0);
    assert_eq!(format(&a), "(1, 2, 3)");
    assert_eq!(format!("{a}"), "(1, 2, 3)");
}
