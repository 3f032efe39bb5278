//! Portal documents used across integration tests

/// Editions listing with two editions on the same day
pub const EDITIONS_JSON: &str = r#"{
  "itens": [
    {"id": 5101, "numero": "25.990", "suplemento": false},
    {"id": 5102, "numero": "25.990-A", "suplemento": true}
  ]
}"#;

/// Summary of edition 5101: two levels of sections
pub const SUMMARY_5101: &str = r#"
<ul>
  <li><span>PODER EXECUTIVO</span>
    <ul>
      <li><span>Governadoria do Estado - GOVE</span>
        <ul>
          <li><span><a identificador="900001">DECRETO Nº 5.001-R, DE 13 DE MAIO DE 2024</a></span></li>
        </ul>
      </li>
      <li><span>Secretaria de Estado da Fazenda - SEFAZ</span>
        <ul>
          <li><span><a identificador="900002">PORTARIA Nº 021-R</a></span></li>
          <li><span><a identificador="900003">INSTRUÇÃO NORMATIVA Nº 4</a></span></li>
        </ul>
      </li>
    </ul>
  </li>
</ul>
"#;

/// Summary of edition 5102: a single publication
pub const SUMMARY_5102: &str = r#"
<ul>
  <li><span>MUNICÍPIOS</span>
    <ul>
      <li><span><a identificador="900010">AVISO DE LICITAÇÃO</a></span></li>
    </ul>
  </li>
</ul>
"#;

/// Publication body page for `text`
pub fn publication_page(text: &str) -> String {
    format!(
        "<html><head><title>Publicação</title></head><body><div class=\"conteudo\"><p>{text}</p></div></body></html>"
    )
}
