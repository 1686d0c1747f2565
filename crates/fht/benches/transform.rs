// Copyright 2024 Ulvetanna Inc.

use criterion::{
	criterion_group, criterion_main, measurement::WallTime, BatchSize, BenchmarkGroup, BenchmarkId,
	Criterion, Throughput,
};
use rand::{thread_rng, Rng};
use reedmuller_fht::WalshHadamardTransform;
use reedmuller_math::Vector;

fn bench_forward_transform(c: &mut Criterion) {
	fn bench_helper(group: &mut BenchmarkGroup<WallTime>, order: usize) {
		let mut rng = thread_rng();
		let data = (0..1 << order)
			.map(|_| if rng.gen::<bool>() { 1 } else { -1 })
			.collect::<Vec<i32>>();
		let v = Vector::new(data.clone()).expect("order >= 1");
		let fht = WalshHadamardTransform::new(order).expect("order is in range");

		group.throughput(Throughput::Elements(1 << order));

		group.bench_function(BenchmarkId::new("factored", order), |b| {
			b.iter_batched(
				|| data.clone(),
				|mut data| fht.forward_transform(&mut data).map(|()| data),
				BatchSize::LargeInput,
			)
		});

		// The dense product is quadratic in the length, keep it to small orders.
		if order <= 8 {
			let dense = fht
				.factors()
				.iter()
				.map(|factor| factor.to_matrix().expect("order is in range"))
				.collect::<Vec<_>>();
			group.bench_function(BenchmarkId::new("dense", order), |b| {
				b.iter(|| {
					dense
						.iter()
						.try_fold(v.clone(), |acc, k| acc.multiply(k))
				})
			});
		}
	}

	let mut group = c.benchmark_group("walsh_hadamard");
	for order in [4, 8, 12, 16] {
		bench_helper(&mut group, order);
	}
	group.finish();
}

criterion_group!(fht, bench_forward_transform);
criterion_main!(fht);
