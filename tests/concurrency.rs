use std::thread;

use sha256_engine::{Digest, sha256};

fn inputs() -> Vec<Vec<u8>> {
    (0..16u8)
        .map(|idx| vec![idx; usize::from(idx) * 37 + 5])
        .collect()
}

fn sequential(inputs: &[Vec<u8>]) -> Vec<Digest> {
    inputs
        .iter()
        .map(|input| sha256(input).unwrap())
        .collect()
}

#[test]
fn scoped_threads_match_sequential() {
    let inputs = inputs();
    let expected = sequential(&inputs);

    let digests: Vec<Digest> = thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| scope.spawn(move || sha256(input).unwrap()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("hashing thread panicked"))
            .collect()
    });

    assert_eq!(digests, expected);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn blocking_tasks_match_sequential() {
    let inputs = inputs();
    let expected = sequential(&inputs);

    let tasks: Vec<_> = inputs
        .into_iter()
        .map(|input| tokio::task::spawn_blocking(move || sha256(&input).unwrap()))
        .collect();

    let mut digests = Vec::with_capacity(tasks.len());
    for task in tasks {
        digests.push(task.await.expect("hashing task panicked"));
    }

    assert_eq!(digests, expected);
}
