/// Builds a batch of tasks of different types.
///
/// Each argument must be an `Arc` of some [`Task`](crate::Task). The handle
/// is cloned, so the caller keeps it and can inspect the task afterwards.
/// Naming the same task twice runs it twice.
///
/// ```rust,ignore
/// let users = Arc::new(FetchUsers::default());
/// let orders = Arc::new(FetchOrders::default());
///
/// concur::concurrent().run(tasks![users, orders])?;
/// ```
#[macro_export]
macro_rules! tasks {
    ( $( $task:expr ),* $(,)? ) => {{
        let tasks: ::std::vec::Vec<::std::sync::Arc<dyn $crate::Task>> = ::std::vec![
            $(
                ::std::sync::Arc::clone(&$task) as ::std::sync::Arc<dyn $crate::Task>
            ),*
        ];
        tasks
    }};
}
