use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hdkey_bip32::Network;
use hdkey_bip44::Wallet;

fn seed() -> [u8; 64] {
    [0x5eu8; 64]
}

fn bench_wallet_from_seed(c: &mut Criterion) {
    c.bench_function("wallet_from_seed", |b| {
        b.iter(|| Wallet::from_seed(black_box(&seed()), Network::BitcoinMainnet).unwrap())
    });
}

fn bench_derive_coin_type(c: &mut Criterion) {
    let wallet = Wallet::from_seed(&seed(), Network::BitcoinMainnet).unwrap();
    c.bench_function("derive_coin_type", |b| {
        b.iter(|| wallet.derive_coin_type(black_box(60)).unwrap())
    });
}

fn bench_derive_address_key(c: &mut Criterion) {
    let wallet = Wallet::from_seed(&seed(), Network::BitcoinMainnet).unwrap();
    c.bench_function("derive_address_key", |b| {
        b.iter(|| wallet.derive_address_key(60, 0, 0, black_box(0)).unwrap())
    });
}

fn bench_ethereum_address(c: &mut Criterion) {
    let wallet = Wallet::from_seed(&seed(), Network::BitcoinMainnet).unwrap();
    c.bench_function("ethereum_address", |b| {
        b.iter(|| wallet.ethereum_address(0, 0, black_box(0)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_wallet_from_seed,
    bench_derive_coin_type,
    bench_derive_address_key,
    bench_ethereum_address,
);
criterion_main!(benches);
