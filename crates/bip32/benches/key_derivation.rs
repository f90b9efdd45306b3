use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hdkey_bip32::{ChildNumber, CurveKind, ExtendedPrivateKey, Network, Specification};

fn seed() -> [u8; 64] {
    [0x5eu8; 64]
}

fn bench_master_from_seed(c: &mut Criterion) {
    c.bench_function("extended_private_key_from_seed", |b| {
        b.iter(|| ExtendedPrivateKey::from_seed(black_box(&seed()), Network::BitcoinMainnet).unwrap())
    });
}

fn bench_normal_child_derivation(c: &mut Criterion) {
    let master = ExtendedPrivateKey::from_seed(&seed(), Network::BitcoinMainnet).unwrap();
    c.bench_function("derive_normal_child", |b| {
        b.iter(|| master.derive_child(black_box(ChildNumber::Normal(0))).unwrap())
    });
}

fn bench_hardened_child_derivation(c: &mut Criterion) {
    let master = ExtendedPrivateKey::from_seed(&seed(), Network::BitcoinMainnet).unwrap();
    c.bench_function("derive_hardened_child", |b| {
        b.iter(|| master.derive_child(black_box(ChildNumber::Hardened(0))).unwrap())
    });
}

fn bench_bip44_path_derivation(c: &mut Criterion) {
    let master = ExtendedPrivateKey::from_seed(&seed(), Network::BitcoinMainnet).unwrap();
    let path = "m/44'/60'/0'/0/0".parse().unwrap();
    c.bench_function("derive_bip44_path", |b| {
        b.iter(|| master.derive_path(black_box(&path)).unwrap())
    });
}

fn bench_slip10_node_from_seed(c: &mut Criterion) {
    c.bench_function("slip10_node_from_seed_secp256k1", |b| {
        b.iter(|| {
            hdkey_bip32::SLIP10Node::from_seed(
                black_box(&seed()),
                CurveKind::Secp256k1,
                Specification::Bip32,
            )
            .unwrap()
        })
    });
}

fn bench_slip10_ed25519_from_seed(c: &mut Criterion) {
    c.bench_function("slip10_node_from_seed_ed25519", |b| {
        b.iter(|| {
            hdkey_bip32::SLIP10Node::from_seed(
                black_box(&seed()),
                CurveKind::Ed25519,
                Specification::Slip10,
            )
            .unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_master_from_seed,
    bench_normal_child_derivation,
    bench_hardened_child_derivation,
    bench_bip44_path_derivation,
    bench_slip10_node_from_seed,
    bench_slip10_ed25519_from_seed,
);
criterion_main!(benches);
