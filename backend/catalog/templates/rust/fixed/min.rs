use std::collections::VecDeque;

/// Minimum element of every window of size `k`.
fn sliding_window_minimum(arr: &[i64], k: usize) -> Vec<i64> {
    if k == 0 || arr.len() < k {
        return Vec::new();
    }

    // Indices, values increasing from front to back
    let mut dq: VecDeque<usize> = VecDeque::new();
    let mut result = Vec::with_capacity(arr.len() - k + 1);

    for i in 0..arr.len() {
        // Remove indices outside the current window
        while dq.front().is_some_and(|&front| front + k <= i) {
            dq.pop_front();
        }

        // Remove larger elements from the back
        while dq.back().is_some_and(|&back| arr[back] >= arr[i]) {
            dq.pop_back();
        }

        dq.push_back(i);

        if i + 1 >= k {
            result.push(arr[dq[0]]);
        }
    }

    result
}

fn main() {
    let arr = [1, 2, 3, 4, 5, 6, 7, 8];
    let result = sliding_window_minimum(&arr, {window_size});
    println!("Minimum in each window of size {window_size}: {result:?}");
}
