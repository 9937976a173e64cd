/// Tenant groups searched in every batch.
pub const SEARCHABLE_GROUPS: [&str; 4] = ["main", "main-hot", "main-warm", "main-cold"];

/// Payload key carrying the tenant group. Indexed as a multitenant field.
pub const GROUP_KEY: &str = "groupId";

/// Fixed 1024-dimensional query vector.
pub const QUERY_VECTOR: [f64; 1024] = [
    15.0, 151.0, 98.0, 23.0, 184.0, 66.0, 225.0, 54.0, 116.0, 176.0, 9.0, 250.0, 85.0, 137.0, 30.0, 190.0,
    120.0, 74.0, 233.0, 22.0, 157.0, 103.0, 49.0, 186.0, 68.0, 218.0, 12.0, 142.0, 95.0, 2.0, 239.0, 72.0,
    169.0, 107.0, 32.0, 205.0, 56.0, 123.0, 181.0, 63.0, 227.0, 20.0, 132.0, 87.0, 252.0, 47.0, 168.0, 117.0,
    40.0, 203.0, 17.0, 153.0, 100.0, 26.0, 184.0, 67.0, 229.0, 58.0, 114.0, 174.0, 6.0, 245.0, 81.0, 138.0,
    34.0, 192.0, 126.0, 79.0, 237.0, 24.0, 156.0, 105.0, 53.0, 188.0, 71.0, 217.0, 10.0, 140.0, 93.0, 1.0,
    238.0, 73.0, 171.0, 109.0, 33.0, 206.0, 57.0, 123.0, 180.0, 62.0, 222.0, 18.0, 131.0, 86.0, 251.0, 46.0,
    167.0, 115.0, 39.0, 200.0, 16.0, 155.0, 102.0, 27.0, 183.0, 65.0, 224.0, 50.0, 113.0, 173.0, 5.0, 244.0,
    80.0, 136.0, 31.0, 191.0, 121.0, 75.0, 236.0, 29.0, 159.0, 104.0, 52.0, 187.0, 69.0, 219.0, 13.0, 143.0,
    96.0, 4.0, 243.0, 78.0, 172.0, 111.0, 35.0, 208.0, 59.0, 125.0, 182.0, 64.0, 228.0, 21.0, 133.0, 88.0,
    253.0, 48.0, 170.0, 118.0, 41.0, 201.0, 15.0, 151.0, 98.0, 23.0, 184.0, 66.0, 225.0, 54.0, 116.0, 176.0,
    9.0, 250.0, 85.0, 137.0, 30.0, 190.0, 120.0, 74.0, 233.0, 22.0, 157.0, 103.0, 49.0, 186.0, 68.0, 218.0,
    12.0, 142.0, 95.0, 2.0, 239.0, 72.0, 169.0, 107.0, 32.0, 205.0, 56.0, 123.0, 181.0, 63.0, 227.0, 224.0,
    7.0, 142.0, 99.0, 201.0, 48.0, 11.0, 251.0, 84.0, 166.0, 33.0, 198.0, 120.0, 61.0, 230.0, 17.0, 133.0,
    215.0, 76.0, 189.0, 41.0, 10.0, 244.0, 155.0, 93.0, 178.0, 60.0, 222.0, 1.0, 118.0, 54.0, 211.0, 147.0,
    88.0, 19.0, 237.0, 70.0, 163.0, 105.0, 30.0, 209.0, 13.0, 150.0, 97.0, 24.0, 182.0, 65.0, 227.0, 43.0,
    111.0, 174.0, 5.0, 255.0, 80.0, 138.0, 36.0, 194.0, 125.0, 73.0, 233.0, 28.0, 159.0, 102.0, 49.0, 186.0,
    68.0, 218.0, 15.0, 145.0, 91.0, 2.0, 240.0, 77.0, 170.0, 108.0, 32.0, 204.0, 51.0, 123.0, 181.0, 63.0,
    225.0, 20.0, 131.0, 85.0, 250.0, 46.0, 167.0, 114.0, 38.0, 199.0, 12.0, 148.0, 95.0, 22.0, 185.0, 69.0,
    231.0, 56.0, 117.0, 176.0, 8.0, 248.0, 82.0, 136.0, 31.0, 192.0, 128.0, 79.0, 238.0, 26.0, 161.0, 106.0,
    53.0, 188.0, 72.0, 216.0, 10.0, 141.0, 98.0, 21.0, 243.0, 75.0, 173.0, 112.0, 35.0, 207.0, 57.0, 126.0,
    190.0, 66.0, 229.0, 3.0, 134.0, 89.0, 253.0, 44.0, 165.0, 119.0, 40.0, 200.0, 16.0, 152.0, 100.0, 25.0,
    184.0, 64.0, 221.0, 50.0, 110.0, 172.0, 6.0, 247.0, 83.0, 139.0, 37.0, 196.0, 124.0, 78.0, 235.0, 29.0,
    158.0, 104.0, 52.0, 187.0, 71.0, 219.0, 14.0, 146.0, 92.0, 4.0, 242.0, 74.0, 169.0, 109.0, 34.0, 206.0,
    55.0, 122.0, 180.0, 62.0, 226.0, 23.0, 132.0, 87.0, 252.0, 47.0, 168.0, 116.0, 39.0, 202.0, 18.0, 154.0,
    103.0, 27.0, 183.0, 67.0, 228.0, 58.0, 115.0, 175.0, 9.0, 249.0, 86.0, 137.0, 32.0, 195.0, 127.0, 81.0,
    239.0, 24.0, 160.0, 107.0, 54.0, 191.0, 73.0, 220.0, 13.0, 144.0, 96.0, 1.0, 241.0, 76.0, 171.0, 113.0,
    36.0, 208.0, 59.0, 127.0, 189.0, 65.0, 224.0, 22.0, 130.0, 84.0, 249.0, 45.0, 166.0, 118.0, 41.0, 201.0,
    15.0, 151.0, 100.0, 26.0, 183.0, 63.0, 220.0, 49.0, 112.0, 173.0, 5.0, 246.0, 81.0, 138.0, 35.0, 193.0,
    124.0, 77.0, 234.0, 27.0, 157.0, 103.0, 51.0, 186.0, 70.0, 217.0, 12.0, 143.0, 97.0, 3.0, 241.0, 74.0,
    168.0, 110.0, 33.0, 205.0, 54.0, 121.0, 179.0, 61.0, 223.0, 19.0, 132.0, 86.0, 251.0, 46.0, 167.0, 117.0,
    40.0, 203.0, 17.0, 153.0, 101.0, 24.0, 182.0, 66.0, 226.0, 53.0, 114.0, 174.0, 8.0, 248.0, 85.0, 136.0,
    30.0, 192.0, 126.0, 78.0, 237.0, 25.0, 159.0, 105.0, 52.0, 188.0, 72.0, 218.0, 11.0, 142.0, 99.0, 2.0,
    240.0, 73.0, 170.0, 108.0, 32.0, 204.0, 56.0, 125.0, 181.0, 62.0, 227.0, 21.0, 131.0, 87.0, 252.0, 47.0,
    169.0, 116.0, 39.0, 200.0, 16.0, 152.0, 98.0, 23.0, 184.0, 68.0, 229.0, 57.0, 113.0, 172.0, 7.0, 247.0,
    83.0, 139.0, 36.0, 194.0, 123.0, 76.0, 235.0, 28.0, 158.0, 104.0, 50.0, 185.0, 69.0, 219.0, 14.0, 145.0,
    91.0, 1.0, 239.0, 75.0, 171.0, 111.0, 34.0, 207.0, 58.0, 124.0, 180.0, 64.0, 228.0, 20.0, 130.0, 85.0,
    250.0, 45.0, 165.0, 115.0, 38.0, 202.0, 18.0, 154.0, 102.0, 27.0, 183.0, 67.0, 230.0, 59.0, 117.0, 176.0,
    10.0, 251.0, 86.0, 137.0, 31.0, 193.0, 122.0, 74.0, 233.0, 26.0, 157.0, 106.0, 53.0, 189.0, 71.0, 221.0,
    13.0, 143.0, 96.0, 4.0, 242.0, 79.0, 173.0, 112.0, 35.0, 206.0, 55.0, 121.0, 178.0, 60.0, 224.0, 17.0,
    129.0, 84.0, 248.0, 44.0, 164.0, 114.0, 37.0, 199.0, 15.0, 151.0, 97.0, 22.0, 182.0, 66.0, 226.0, 54.0,
    118.0, 177.0, 9.0, 249.0, 82.0, 135.0, 30.0, 191.0, 125.0, 78.0, 236.0, 29.0, 160.0, 107.0, 51.0, 186.0,
    70.0, 216.0, 12.0, 142.0, 95.0, 3.0, 241.0, 77.0, 172.0, 110.0, 33.0, 205.0, 52.0, 120.0, 179.0, 61.0,
    223.0, 19.0, 133.0, 88.0, 253.0, 48.0, 170.0, 119.0, 41.0, 201.0, 14.0, 150.0, 99.0, 25.0, 187.0, 69.0,
    225.0, 56.0, 116.0, 175.0, 8.0, 246.0, 80.0, 134.0, 28.0, 190.0, 124.0, 76.0, 234.0, 23.0, 158.0, 103.0,
    49.0, 185.0, 68.0, 218.0, 11.0, 141.0, 94.0, 2.0, 240.0, 72.0, 169.0, 108.0, 32.0, 204.0, 55.0, 122.0,
    181.0, 63.0, 227.0, 20.0, 132.0, 87.0, 252.0, 47.0, 168.0, 117.0, 40.0, 203.0, 17.0, 153.0, 100.0, 26.0,
    184.0, 67.0, 229.0, 58.0, 114.0, 174.0, 6.0, 245.0, 81.0, 138.0, 34.0, 192.0, 126.0, 79.0, 237.0, 24.0,
    156.0, 105.0, 53.0, 188.0, 71.0, 217.0, 10.0, 140.0, 93.0, 1.0, 238.0, 73.0, 171.0, 109.0, 33.0, 206.0,
    57.0, 123.0, 180.0, 62.0, 222.0, 18.0, 131.0, 86.0, 251.0, 46.0, 167.0, 115.0, 39.0, 200.0, 16.0, 155.0,
    102.0, 27.0, 183.0, 65.0, 224.0, 50.0, 113.0, 173.0, 5.0, 244.0, 80.0, 136.0, 31.0, 191.0, 121.0, 75.0,
    236.0, 29.0, 159.0, 104.0, 52.0, 187.0, 69.0, 219.0, 13.0, 143.0, 96.0, 4.0, 243.0, 78.0, 172.0, 111.0,
    35.0, 208.0, 59.0, 125.0, 182.0, 64.0, 228.0, 21.0, 133.0, 88.0, 253.0, 48.0, 170.0, 118.0, 41.0, 201.0,
    15.0, 151.0, 98.0, 23.0, 184.0, 66.0, 225.0, 54.0, 116.0, 176.0, 9.0, 250.0, 85.0, 137.0, 30.0, 190.0,
    120.0, 74.0, 233.0, 22.0, 157.0, 103.0, 49.0, 186.0, 68.0, 218.0, 12.0, 142.0, 95.0, 2.0, 239.0, 72.0,
    169.0, 107.0, 32.0, 205.0, 56.0, 123.0, 181.0, 63.0, 227.0, 20.0, 132.0, 87.0, 252.0, 47.0, 168.0, 117.0,
    40.0, 203.0, 17.0, 153.0, 100.0, 26.0, 184.0, 67.0, 229.0, 58.0, 114.0, 174.0, 6.0, 245.0, 81.0, 138.0,
    34.0, 192.0, 126.0, 79.0, 237.0, 24.0, 156.0, 105.0, 53.0, 188.0, 71.0, 217.0, 10.0, 140.0, 93.0, 1.0,
    238.0, 73.0, 171.0, 109.0, 33.0, 206.0, 57.0, 123.0, 180.0, 62.0, 222.0, 18.0, 131.0, 86.0, 251.0, 46.0,
    167.0, 115.0, 39.0, 200.0, 16.0, 155.0, 102.0, 27.0, 183.0, 65.0, 224.0, 50.0, 113.0, 173.0, 5.0, 244.0,
    80.0, 136.0, 31.0, 191.0, 121.0, 75.0, 236.0, 29.0, 159.0, 104.0, 52.0, 187.0, 69.0, 219.0, 13.0, 143.0,
    96.0, 4.0, 243.0, 78.0, 172.0, 111.0, 35.0, 208.0, 59.0, 125.0, 182.0, 64.0, 228.0, 21.0, 133.0, 88.0,
    253.0, 48.0, 170.0, 118.0, 41.0, 201.0, 15.0, 151.0, 98.0, 23.0, 184.0, 66.0, 225.0, 54.0, 116.0, 176.0,
    9.0, 250.0, 85.0, 137.0, 30.0, 190.0, 120.0, 74.0, 233.0, 22.0, 157.0, 103.0, 49.0, 186.0, 68.0, 218.0,
    12.0, 142.0, 95.0, 2.0, 239.0, 72.0, 169.0, 107.0, 32.0, 205.0, 56.0, 123.0, 181.0, 63.0, 227.0, 20.0,
];
