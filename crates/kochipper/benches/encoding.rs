#![allow(missing_docs)]

use std::sync::LazyLock;

use divan::{Bencher, black_box, counter::BytesCount};
use kochipper::{ReservedTokens, Tokenizer};

fn main() {
    divan::main();
}

static CORPUS: [&str; 6] = [
    "안녕하세요 제 이름은 홍길동입니다.",
    "아 무한도전 진짜 ㅈㄴ 재밌네 ㅋㅋ",
    "현재 깃허브 리포지토리 주소는 https://github.com/Kairo0628/ml_dl_tutorials 입니다.",
    "전화번호는 010-1234-5678 입니다.",
    "kairo_o@naver.com 으로 문의 주세요.",
    "이 문장은 인코드 테스트용 문장입니다.",
];

fn corpus_text() -> String {
    CORPUS.join(" ").repeat(10)
}

static TOKENIZER: LazyLock<Tokenizer<u32>> = LazyLock::new(|| {
    let mut tokenizer = Tokenizer::default();
    tokenizer
        .fit(CORPUS, 1 << 10, ReservedTokens::default().to_vec())
        .unwrap();
    tokenizer
});

#[divan::bench]
fn fit(bencher: Bencher) {
    let reserved = ReservedTokens::default().to_vec();
    bencher.bench(|| {
        let mut tokenizer: Tokenizer<u32> = Tokenizer::default();
        tokenizer
            .fit(black_box(CORPUS), 1 << 10, reserved.iter())
            .unwrap();
        tokenizer
    });
}

#[divan::bench]
fn encode(bencher: Bencher) {
    let text = corpus_text();
    let tokenizer = &*TOKENIZER;
    bencher
        .counter(BytesCount::new(text.len()))
        .bench(|| tokenizer.encode(black_box(text.as_str())));
}

#[divan::bench]
fn decode(bencher: Bencher) {
    let text = corpus_text();
    let tokenizer = &*TOKENIZER;
    let tokens = tokenizer.encode(&text);
    bencher
        .counter(BytesCount::new(text.len()))
        .bench(|| tokenizer.decode(black_box(&tokens)).unwrap());
}
