/// Average of every window of size `k`.
fn sliding_window_average(arr: &[i64], k: usize) -> Vec<f64> {
    if k == 0 || arr.len() < k {
        return Vec::new();
    }

    let mut window_sum: i64 = arr[..k].iter().sum();
    let mut result = vec![window_sum as f64 / k as f64];

    for i in k..arr.len() {
        window_sum = window_sum - arr[i - k] + arr[i];
        result.push(window_sum as f64 / k as f64);
    }

    result
}

fn main() {
    let arr = [1, 2, 3, 4, 5, 6, 7, 8];
    let result = sliding_window_average(&arr, {window_size});
    println!("Average of each window of size {window_size}: {result:?}");
}
