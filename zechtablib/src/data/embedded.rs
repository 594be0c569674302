//! The GF(5^3) Zech logarithm table.
//!
//! Built from the modulus x^3 + 3x + 2 with x as the primitive element:
//! each line `n -> z` states `1 + x^n = x^z`. The first line covers the
//! zero element (`1 + 0 = x^0`), and `62 -> Infinity` records `x^62 = -1`.

use super::entry::Entry;
use super::parse::parse_table;

/// The literal table, one `key -> value` entry per line.
pub const GF125_ZECH_LOG: &str = "\
Infinity -> 0\n\
0 -> 93\n\
1 -> 103\n\
2 -> 9\n\
3 -> 88\n\
4 -> 86\n\
5 -> 19\n\
6 -> 77\n\
7 -> 121\n\
8 -> 37\n\
9 -> 56\n\
10 -> 45\n\
11 -> 23\n\
12 -> 27\n\
13 -> 2\n\
14 -> 34\n\
15 -> 68\n\
16 -> 24\n\
17 -> 89\n\
18 -> 43\n\
19 -> 99\n\
20 -> 58\n\
21 -> 16\n\
22 -> 4\n\
23 -> 59\n\
24 -> 66\n\
25 -> 95\n\
26 -> 65\n\
27 -> 79\n\
28 -> 104\n\
29 -> 28\n\
30 -> 13\n\
31 -> 62\n\
32 -> 26\n\
33 -> 87\n\
34 -> 1\n\
35 -> 109\n\
36 -> 6\n\
37 -> 81\n\
38 -> 116\n\
39 -> 112\n\
40 -> 61\n\
41 -> 63\n\
42 -> 90\n\
43 -> 110\n\
44 -> 40\n\
45 -> 32\n\
46 -> 5\n\
47 -> 97\n\
48 -> 105\n\
49 -> 17\n\
50 -> 101\n\
51 -> 49\n\
52 -> 55\n\
53 -> 117\n\
54 -> 100\n\
55 -> 115\n\
56 -> 30\n\
57 -> 41\n\
58 -> 18\n\
59 -> 69\n\
60 -> 11\n\
61 -> 33\n\
62 -> Infinity\n\
63 -> 96\n\
64 -> 75\n\
65 -> 10\n\
66 -> 84\n\
67 -> 108\n\
68 -> 98\n\
69 -> 60\n\
70 -> 46\n\
71 -> 64\n\
72 -> 3\n\
73 -> 122\n\
74 -> 51\n\
75 -> 92\n\
76 -> 57\n\
77 -> 50\n\
78 -> 83\n\
79 -> 111\n\
80 -> 120\n\
81 -> 67\n\
82 -> 48\n\
83 -> 22\n\
84 -> 21\n\
85 -> 73\n\
86 -> 78\n\
87 -> 44\n\
88 -> 94\n\
89 -> 74\n\
90 -> 91\n\
91 -> 54\n\
92 -> 118\n\
93 -> 31\n\
94 -> 107\n\
95 -> 123\n\
96 -> 76\n\
97 -> 52\n\
98 -> 39\n\
99 -> 70\n\
100 -> 42\n\
101 -> 36\n\
102 -> 106\n\
103 -> 119\n\
104 -> 38\n\
105 -> 80\n\
106 -> 25\n\
107 -> 72\n\
108 -> 8\n\
109 -> 53\n\
110 -> 20\n\
111 -> 113\n\
112 -> 15\n\
113 -> 12\n\
114 -> 35\n\
115 -> 47\n\
116 -> 29\n\
117 -> 114\n\
118 -> 71\n\
119 -> 14\n\
120 -> 82\n\
121 -> 85\n\
122 -> 7\n\
123 -> 102";

/// Parse the embedded table into its ordered entries.
pub fn embedded_entries() -> crate::Result<Vec<Entry>> {
    parse_table(GF125_ZECH_LOG)
}
