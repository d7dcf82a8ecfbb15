use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ringfifo::{combine, Fifo, SyncFifo};

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for size in [16, 256, 4096].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("borrowed", size), size, |b, &size| {
            let mut buffer = vec![0u64; size + 1];
            let mut fifo = Fifo::from_buffer(&mut buffer).unwrap();

            b.iter(|| {
                for i in 0..size as u64 {
                    black_box(fifo.push(i)).unwrap();
                }
                while let Some(value) = fifo.pop() {
                    black_box(value);
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("locked", size), size, |b, &size| {
            let fifo = SyncFifo::<u64>::with_slots(size + 1).unwrap();

            b.iter(|| {
                for i in 0..size as u64 {
                    black_box(fifo.push(i)).unwrap();
                }
                while let Some(value) = fifo.pop() {
                    black_box(value);
                }
            });
        });
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("get", size), size, |b, &size| {
            let mut fifo = Fifo::<u32>::with_slots(size + 1).unwrap();

            // Rotate the cursors so the contents wrap
            for _ in 0..size / 2 {
                fifo.push(0).unwrap();
                fifo.pop();
            }
            for i in 0..size as u32 {
                fifo.push(i).unwrap();
            }

            b.iter(|| {
                for i in 0..size {
                    black_box(fifo.get(i));
                }
            });
        });
    }
    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    let size = 10_000;
    let mut fifo = Fifo::<i32>::with_slots(size + 1).unwrap();
    for _ in 0..size / 3 {
        fifo.push(0).unwrap();
        fifo.pop();
    }
    for i in 0..size as i32 {
        fifo.push(i).unwrap();
    }

    group.throughput(Throughput::Elements(size as u64));
    group.bench_function("reduce_widening", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            fifo.reduce(&mut sum, combine::add_i32_to_i64);
            black_box(sum)
        });
    });
    group.bench_function("find_last", |b| {
        b.iter(|| black_box(fifo.find(|&x| x == size as i32 - 1)));
    });
    group.bench_function("copy_all", |b| {
        let mut dst = vec![0i32; size];
        b.iter(|| black_box(fifo.copy_all(&mut dst)));
    });
    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_random_access, bench_traversal);
criterion_main!(benches);
