// Pipes hashed messages from a producer thread to a consumer thread
// through one shared message ring.
//
// cargo run --example pipe -- <num_messages> [ring_bytes]
use msgring::Core::FrameError;
use msgring::Framing::{MessageRingBuilder, SharedMessageRing};
use sha2::{Digest, Sha256};
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

fn hash_of(i: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("message_{}", i).as_bytes());
    format!("{:x}", hasher.finalize())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <num_messages> [ring_bytes]", args[0]);
        std::process::exit(1);
    }

    let num_messages: usize = args[1].parse()?;
    let ring_bytes: usize = args.get(2).map(|s| s.parse::<usize>()).transpose()?.unwrap_or(4096);

    let ring: SharedMessageRing = MessageRingBuilder::new()
        .with_capacity(ring_bytes)
        .build_shared()?;
    println!("Pipe: ring of {} bytes, {} messages", ring_bytes, num_messages);

    // The last message carries the longest index
    let longest = format!("{}:{}", num_messages.saturating_sub(1), hash_of(0)).len();
    let max_msg_len = ring.with_ring(|ring| ring.max_msg_len());
    if longest > max_msg_len {
        return Err(format!(
            "a {}-byte message does not fit a {}-byte ring (max payload {})",
            longest, ring_bytes, max_msg_len
        )
        .into());
    }

    let keep_running = Arc::new(AtomicBool::new(true));
    let keep_running_for_handler = Arc::clone(&keep_running);

    // Handle Ctrl+C to stop both sides
    ctrlc::set_handler(move || {
        keep_running_for_handler.store(false, Ordering::SeqCst);
    })?;

    let start = std::time::Instant::now();

    let producer = {
        let ring = ring.clone();
        let keep_running = Arc::clone(&keep_running);
        thread::spawn(move || {
            let mut sent = 0;
            let mut full_retries = 0u64;
            while sent < num_messages && keep_running.load(Ordering::Acquire) {
                let msg = format!("{}:{}", sent, hash_of(sent));
                match ring.push_msg(msg.as_bytes()) {
                    Ok(()) => sent += 1,
                    Err(FrameError::Full { .. }) => {
                        full_retries += 1;
                        thread::yield_now();
                    }
                    Err(e) => {
                        eprintln!("Producer: {}", e);
                        break;
                    }
                }
            }
            (sent, full_retries)
        })
    };

    let mut received = 0;
    let mut mismatches = 0;
    let mut dest = vec![0u8; longest];
    while received < num_messages && keep_running.load(Ordering::Acquire) {
        match ring.pop_msg(&mut dest) {
            Ok(len) => {
                let expected = format!("{}:{}", received, hash_of(received));
                if &dest[..len] != expected.as_bytes() {
                    mismatches += 1;
                }
                received += 1;
                if received % 1000 == 0 {
                    println!("--- Received {} messages ---", received);
                }
            }
            Err(FrameError::Empty) => thread::yield_now(),
            Err(e) => {
                eprintln!("Consumer: {}", e);
                break;
            }
        }
    }

    let (sent, full_retries) = producer.join().expect("producer thread panicked");
    let elapsed = start.elapsed();

    println!("Pipe: sent {}, received {} in {:.2?}", sent, received, elapsed);
    println!("Pipe: producer hit a full ring {} times", full_retries);
    println!(
        "Average: {:.2} messages/second",
        received as f64 / elapsed.as_secs_f64()
    );

    if mismatches == 0 && received == num_messages {
        println!("All messages received intact and in order");
    } else {
        println!("{} mismatched messages", mismatches);
    }

    Ok(())
}
