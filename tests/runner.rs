use concur::{BoxError, ConcurrentRunner, Runner, Task, tasks};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

#[derive(Default)]
struct MockJob {
    invoked: AtomicUsize,
    return_value: Option<String>,
    actual_return_value: Mutex<Option<String>>,
}

impl Task for MockJob {
    fn exec(&self) -> Result<(), BoxError> {
        self.invoked.fetch_add(1, Ordering::SeqCst);

        if let Some(value) = &self.return_value {
            *self.actual_return_value.lock().unwrap() = Some(value.clone());
        }

        Ok(())
    }
}

fn invoked(job: &MockJob) -> usize {
    job.invoked.load(Ordering::SeqCst)
}

#[test]
fn test_run_simple() {
    let jobs: Vec<_> = (0..9).map(|_| Arc::new(MockJob::default())).collect();

    let result = concur::concurrent().run(jobs.iter().cloned());

    assert!(result.is_ok(), "unexpected error: {:?}", result);
    for (i, job) in jobs.iter().enumerate() {
        assert_eq!(invoked(job), 1, "jobs[{}] invoked incorrect number of times", i);
    }
}

#[test]
fn test_run_uneven() {
    let job1 = Arc::new(MockJob::default());
    let job2 = Arc::new(MockJob::default());
    let job3 = Arc::new(MockJob::default());

    let result = concur::concurrent().run([
        job1.clone(),
        job2.clone(),
        job2.clone(),
        job3.clone(),
        job3.clone(),
        job3.clone(),
    ]);

    assert!(result.is_ok());
    assert_eq!(invoked(&job1), 1);
    assert_eq!(invoked(&job2), 2);
    assert_eq!(invoked(&job3), 3);
}

#[test]
fn test_run_return_data() {
    let jobs: Vec<_> = (0..42)
        .map(|i| {
            Arc::new(MockJob {
                return_value: Some(format!("MockJobReturnValue{}", i)),
                ..MockJob::default()
            })
        })
        .collect();

    let result = concur::concurrent().run(jobs.iter().cloned());

    assert!(result.is_ok());
    for (i, job) in jobs.iter().enumerate() {
        assert_eq!(invoked(job), 1, "jobs[{}] invoked incorrect number of times", i);
        assert_eq!(
            job.actual_return_value.lock().unwrap().as_deref(),
            Some(format!("MockJobReturnValue{}", i).as_str()),
            "jobs[{}] returned incorrect results",
            i
        );
    }
}

#[test]
fn test_run_no_tasks() {
    let result = concur::concurrent().run(Vec::<Arc<MockJob>>::new());

    assert!(result.is_ok());
}

#[test]
fn test_run_shared_job_many_times() {
    const RUNS: usize = 1_000;

    let job = Arc::new(MockJob::default());
    let result = concur::concurrent().run((0..RUNS).map(|_| job.clone()));

    assert!(result.is_ok());
    assert_eq!(invoked(&job), RUNS);
}

#[test]
fn test_run_closures() {
    let counter = Arc::new(AtomicUsize::new(0));

    let tasks: Vec<Arc<dyn Task>> = (1..=10)
        .map(|i| {
            let counter = counter.clone();
            Arc::new(move || -> Result<(), BoxError> {
                counter.fetch_add(i, Ordering::SeqCst);
                Ok(())
            }) as Arc<dyn Task>
        })
        .collect();

    let result = concur::concurrent().run(tasks);

    assert!(result.is_ok());
    assert_eq!(counter.load(Ordering::SeqCst), 55);
}

#[test]
fn test_run_heterogeneous_with_macro() {
    let job = Arc::new(MockJob::default());
    let hits = Arc::new(AtomicUsize::new(0));
    let closure = {
        let hits = hits.clone();
        Arc::new(move || -> Result<(), BoxError> {
            hits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    };

    let result = concur::concurrent().run(tasks![job, closure, job]);

    assert!(result.is_ok());
    assert_eq!(invoked(&job), 2);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_run_tasks_on_separate_threads() {
    let caller = thread::current().id();
    let seen = Arc::new(Mutex::new(HashSet::new()));

    let tasks: Vec<Arc<dyn Task>> = (0..8)
        .map(|_| {
            let seen = seen.clone();
            Arc::new(move || -> Result<(), BoxError> {
                seen.lock().unwrap().insert(thread::current().id());
                Ok(())
            }) as Arc<dyn Task>
        })
        .collect();

    concur::concurrent().run(tasks).unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 8, "each task should get its own thread");
    assert!(!seen.contains(&caller), "tasks must not run on the caller's thread");
}

#[test]
fn test_runner_reusable() {
    let runner = ConcurrentRunner::new();
    let job = Arc::new(MockJob::default());

    for _ in 0..5 {
        runner.run([job.clone(), job.clone()]).unwrap();
    }

    assert_eq!(invoked(&job), 10);
}

fn run_generic<R: Runner>(runner: &R, jobs: &[Arc<MockJob>]) -> bool {
    runner.run(jobs.iter().cloned()).is_ok()
}

#[test]
fn test_runner_trait() {
    let jobs: Vec<_> = (0..3).map(|_| Arc::new(MockJob::default())).collect();

    assert!(run_generic(&ConcurrentRunner::new(), &jobs));
    for job in &jobs {
        assert_eq!(invoked(job), 1);
    }
}
