/// Maximum sum of any subarray of size `k`.
fn sliding_window_sum(arr: &[i64], k: usize) -> Option<i64> {
    if k == 0 || arr.len() < k {
        return None;
    }

    let mut window_sum: i64 = arr[..k].iter().sum();
    let mut max_sum = window_sum;

    for i in k..arr.len() {
        // Drop the element leaving the window, add the one entering it
        window_sum = window_sum - arr[i - k] + arr[i];
        max_sum = max_sum.max(window_sum);
    }

    Some(max_sum)
}

fn main() {
    let arr = [1, 2, 3, 4, 5, 6, 7, 8];
    let result = sliding_window_sum(&arr, {window_size});
    println!("Maximum sum of subarray of size {window_size}: {result:?}");
}
