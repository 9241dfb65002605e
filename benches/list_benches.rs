use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use locked_list::LockedList;
use rand::Rng;
use std::sync::{Arc, Barrier};
use std::thread;

const SAMPLE_SIZE: usize = 1_000;
const OPS_PER_RUN: usize = 10_000;

// Enum to define the workload mix
enum Workload {
    WriteHeavy, // 80% writes, 20% reads
    ReadHeavy,  // 20% writes, 80% reads
    Mixed,      // 50% writes, 50% reads
}

impl Workload {
    fn write_ratio(&self) -> u32 {
        match self {
            Workload::WriteHeavy => 80,
            Workload::ReadHeavy => 20,
            Workload::Mixed => 50,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Workload::WriteHeavy => "write_heavy",
            Workload::ReadHeavy => "read_heavy",
            Workload::Mixed => "mixed",
        }
    }
}

fn locked_list_benchmark(c: &mut Criterion, threads: usize, workload: Workload) {
    let mut group = c.benchmark_group(format!("LockedList_{}_threads", threads));
    let write_ratio = workload.write_ratio();

    let list: Arc<LockedList<usize>> = Arc::new((0..SAMPLE_SIZE).collect());

    group.throughput(Throughput::Elements(OPS_PER_RUN as u64));

    group.bench_function(BenchmarkId::new(workload.name(), SAMPLE_SIZE), |b| {
        b.iter_with_setup(
            || (Arc::clone(&list), Arc::new(Barrier::new(threads))),
            |(list, barrier)| {
                thread::scope(|s| {
                    for _ in 0..threads {
                        let list = Arc::clone(&list);
                        let barrier = Arc::clone(&barrier);

                        s.spawn(move || {
                            let mut rng = rand::rng();
                            barrier.wait();
                            for _ in 0..OPS_PER_RUN / threads {
                                let value = rng.random_range(0..SAMPLE_SIZE);
                                let random_val = rng.random_range(0..100);

                                if random_val < write_ratio {
                                    // Rotate one element from the front to the back
                                    // so the list keeps its size across runs.
                                    if let Some(head) = list.delete_head() {
                                        list.append(head);
                                    }
                                } else {
                                    black_box(list.contains(&value));
                                }
                            }
                        });
                    }
                });
            },
        );
    });

    group.finish();
}

fn delete_tail_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("LockedList_delete_tail");
    for size in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let list: LockedList<usize> = (0..size).collect();
            b.iter(|| {
                let tail = list.delete_tail();
                if let Some(tail) = tail {
                    list.append(black_box(tail));
                }
            });
        });
    }
    group.finish();
}

fn locked_list_small_pressure(c: &mut Criterion) {
    locked_list_benchmark(c, 2, Workload::Mixed);
    locked_list_benchmark(c, 2, Workload::ReadHeavy);
    locked_list_benchmark(c, 2, Workload::WriteHeavy);
}

fn locked_list_medium_pressure(c: &mut Criterion) {
    locked_list_benchmark(c, 4, Workload::Mixed);
    locked_list_benchmark(c, 4, Workload::ReadHeavy);
    locked_list_benchmark(c, 4, Workload::WriteHeavy);
}

fn locked_list_high_pressure(c: &mut Criterion) {
    locked_list_benchmark(c, 8, Workload::Mixed);
    locked_list_benchmark(c, 8, Workload::ReadHeavy);
    locked_list_benchmark(c, 8, Workload::WriteHeavy);
}

criterion_group!(
    benches,
    locked_list_small_pressure,
    locked_list_medium_pressure,
    locked_list_high_pressure,
    delete_tail_benchmark
);
criterion_main!(benches);
