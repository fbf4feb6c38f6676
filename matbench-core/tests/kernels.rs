use matbench_core::{
    Error, GemmKernel, Kernel, Matrix, MatrixGenerator, NaiveKernel, RayonKernel,
    WgpuKernel,
};

fn concrete_operands() -> (Matrix, Matrix) {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
    (a, b)
}

fn expected_product() -> Matrix {
    Matrix::from_rows(vec![vec![19.0, 22.0], vec![43.0, 50.0]]).unwrap()
}

#[test]
fn naive_matches_concrete_scenario() {
    let (a, b) = concrete_operands();
    let out = NaiveKernel.multiply(&a, &b).unwrap();
    assert_eq!(out, expected_product());
}

#[test]
fn gemm_matches_concrete_scenario() {
    let (a, b) = concrete_operands();
    let out = GemmKernel.multiply(&a, &b).unwrap();
    assert!(out.allclose(&expected_product(), 1e-6));
}

#[test]
fn rayon_matches_concrete_scenario() {
    let (a, b) = concrete_operands();
    let out = RayonKernel.multiply(&a, &b).unwrap();
    assert!(out.allclose(&expected_product(), 1e-6));
}

#[test]
fn cpu_kernels_agree_with_the_naive_oracle() {
    let mut generator = MatrixGenerator::seeded(1234);
    let a = generator.generate(16).unwrap();
    let b = generator.generate(16).unwrap();
    let reference = NaiveKernel.multiply(&a, &b).unwrap();

    let gemm_out = GemmKernel.multiply(&a, &b).unwrap();
    assert!(gemm_out.allclose(&reference, 1e-6));

    let rayon_out = RayonKernel.multiply(&a, &b).unwrap();
    assert!(rayon_out.allclose(&reference, 1e-6));
}

#[test]
fn multiplying_by_identity_is_a_no_op() {
    let mut generator = MatrixGenerator::seeded(5);
    let a = generator.generate(4).unwrap();
    let identity = Matrix::from_rows(
        (0..4)
            .map(|i| (0..4).map(|j| f64::from(u8::from(i == j))).collect())
            .collect(),
    )
    .unwrap();
    let out = NaiveKernel.multiply(&a, &identity).unwrap();
    assert_eq!(out, a);
}

#[test]
fn mismatched_operand_sizes_are_rejected() {
    let mut generator = MatrixGenerator::seeded(9);
    let a = generator.generate(3).unwrap();
    let b = generator.generate(4).unwrap();
    for kernel in [
        Box::new(NaiveKernel) as Box<dyn Kernel>,
        Box::new(GemmKernel),
        Box::new(RayonKernel),
    ] {
        assert!(matches!(
            kernel.multiply(&a, &b),
            Err(Error::InvalidInput { .. })
        ));
    }
}

#[test]
#[ignore = "requires a wgpu adapter"]
fn wgpu_agrees_with_the_naive_oracle() {
    let kernel = WgpuKernel::new();
    kernel.prepare().unwrap();

    let (a, b) = concrete_operands();
    let out = kernel.multiply(&a, &b).unwrap();
    assert!(out.allclose(&expected_product(), 1e-6));

    let mut generator = MatrixGenerator::seeded(99);
    let a = generator.generate(32).unwrap();
    let b = generator.generate(32).unwrap();
    let reference = NaiveKernel.multiply(&a, &b).unwrap();
    let out = kernel.multiply(&a, &b).unwrap();
    // Device math is f32, but integral inputs below 100 stay exact.
    assert!(out.allclose(&reference, 1e-6));
}
