//! Test utilities for bulletin parser testing
//!
//! Builders for bulletin XML fragments shaped like JMA typhoon bulletins,
//! so each test can vary one block while keeping the rest well-formed.

use crate::document::Document;


/// One `jmx_eb:Axis` entry: (direction, radius in km)
pub type AxisSpec<'a> = (&'a str, &'a str);

/// Build a full bulletin around the given `MeteorologicalInfo` blocks
pub fn bulletin_xml(infos: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Report xmlns="http://xml.kishou.go.jp/jmaxml1/" xmlns:jmx="http://xml.kishou.go.jp/jmaxml1/">
  <Control>
    <Title>台風解析・予報情報（５日予報）（Ｈ３０）</Title>
    <DateTime>2022-09-17T18:50:00Z</DateTime>
  </Control>
  <Head xmlns="http://xml.kishou.go.jp/jmaxml1/informationBasis1/">
    <Title>台風解析・予報情報（５日予報）（Ｈ３０）</Title>
    <ReportDateTime>2022-09-18T03:45:00+09:00</ReportDateTime>
    <TargetDateTime>2022-09-18T03:00:00+09:00</TargetDateTime>
    <EventID>TC2214</EventID>
    <InfoType>発表</InfoType>
    <Serial>54</Serial>
  </Head>
  <Body xmlns="http://xml.kishou.go.jp/jmaxml1/body/meteorology1/" xmlns:jmx_eb="http://xml.kishou.go.jp/jmaxml1/elementBasis1/">
    <MeteorologicalInfos type="台風情報">
{}
    </MeteorologicalInfos>
  </Body>
</Report>"#,
        infos.join("\n")
    )
}

/// Analysis-style block: `jmx_eb:Coordinate` center, name and class parts
pub fn analysis_info(latlon: &str, wind: Option<(u32, u32)>, areas: &[String]) -> String {
    format!(
        r#"<MeteorologicalInfo>
  <DateTime type="実況">2022-09-18T03:00:00+09:00</DateTime>
  <Item>
    <Kind><Property><Type>呼称</Type>
      <TyphoonNamePart>
        <Name>NANMADOL</Name>
        <NameKana>ナンマドル</NameKana>
        <Number>2214</Number>
      </TyphoonNamePart>
    </Property></Kind>
    <Kind><Property><Type>階級</Type>
      <ClassPart>
        <jmx_eb:TyphoonClass type="熱帯擾乱種類">台風（Ｔ）</jmx_eb:TyphoonClass>
        <jmx_eb:AreaClass type="大きさ階級">大型</jmx_eb:AreaClass>
        <jmx_eb:IntensityClass type="強さ階級">非常に強い</jmx_eb:IntensityClass>
      </ClassPart>
    </Property></Kind>
    <Kind><Property><Type>中心</Type>
      <CenterPart>
        <jmx_eb:Coordinate type="中心位置（度）" condition="正確">{latlon}</jmx_eb:Coordinate>
        <jmx_eb:Coordinate type="中心位置（度分）">+3054+13030/</jmx_eb:Coordinate>
        <Location>屋久島の南西約４０ｋｍ</Location>
        <jmx_eb:Direction type="移動方向" unit="16方位漢字">北</jmx_eb:Direction>
        <jmx_eb:Speed type="移動速度" unit="ノット">9</jmx_eb:Speed>
        <jmx_eb:Speed type="移動速度" unit="km/h">15</jmx_eb:Speed>
        <jmx_eb:Pressure type="中心気圧" unit="hPa">935</jmx_eb:Pressure>
      </CenterPart>
    </Property></Kind>
{wind}
{areas}
  </Item>
</MeteorologicalInfo>"#,
        latlon = latlon,
        wind = wind.map(|(max, gust)| wind_part(max, gust)).unwrap_or_default(),
        areas = areas.join("\n"),
    )
}

/// Forecast-style block: center given by the forecast circle's `jmx_eb:BasePoint`
pub fn forecast_info(date_time: &str, latlon: &str, circle_axes: &[AxisSpec<'_>]) -> String {
    format!(
        r#"<MeteorologicalInfo>
  <DateTime type="予報 24時間後">{date_time}</DateTime>
  <Item>
    <Kind><Property><Type>中心</Type>
      <CenterPart>
        <ProbabilityCircle type="予報円">
          <jmx_eb:BasePoint type="中心位置（度）">{latlon}</jmx_eb:BasePoint>
          <jmx_eb:BasePoint type="中心位置（度分）">+3500+13500/</jmx_eb:BasePoint>
{axes}
        </ProbabilityCircle>
        <jmx_eb:Direction type="移動方向" unit="16方位漢字">北東</jmx_eb:Direction>
        <jmx_eb:Speed type="移動速度" unit="km/h" condition="ほとんど停滞"></jmx_eb:Speed>
        <jmx_eb:Pressure type="中心気圧" unit="hPa">980</jmx_eb:Pressure>
      </CenterPart>
    </Property></Kind>
  </Item>
</MeteorologicalInfo>"#,
        date_time = date_time,
        latlon = latlon,
        axes = axes_xml(circle_axes),
    )
}

pub fn wind_part(max: u32, gust: u32) -> String {
    format!(
        r#"<Kind><Property><Type>風</Type>
      <WindPart>
        <jmx_eb:WindSpeed type="最大風速" unit="ノット" condition="中心付近">{max_kt}</jmx_eb:WindSpeed>
        <jmx_eb:WindSpeed type="最大風速" unit="m/s" condition="中心付近">{max}</jmx_eb:WindSpeed>
        <jmx_eb:WindSpeed type="最大瞬間風速" unit="ノット">{gust_kt}</jmx_eb:WindSpeed>
        <jmx_eb:WindSpeed type="最大瞬間風速" unit="m/s">{gust}</jmx_eb:WindSpeed>
      </WindPart>
    </Property></Kind>"#,
        max_kt = max * 2,
        max = max,
        gust_kt = gust * 2,
        gust = gust,
    )
}

/// `WarningAreaPart` block; `wind_speed` is in m/s
pub fn warning_area(area_type: &str, wind_speed: Option<u32>, axes: &[AxisSpec<'_>]) -> String {
    let speed = wind_speed
        .map(|ms| {
            format!(
                r#"<jmx_eb:WindSpeed type="風速" unit="ノット">{}</jmx_eb:WindSpeed>
        <jmx_eb:WindSpeed type="風速" unit="m/s">{}</jmx_eb:WindSpeed>"#,
                ms * 2,
                ms
            )
        })
        .unwrap_or_default();
    format!(
        r#"<Kind><Property><Type>{area_type}</Type>
      <WarningAreaPart type="{area_type}">
        {speed}
        <jmx_eb:Circle>
{axes}
        </jmx_eb:Circle>
      </WarningAreaPart>
    </Property></Kind>"#,
        area_type = area_type,
        speed = speed,
        axes = axes_xml(axes),
    )
}

/// `ProbabilityCircle` block outside the center part
pub fn probability_circle(wind_speed: Option<u32>, axes: &[AxisSpec<'_>]) -> String {
    let speed = wind_speed
        .map(|ms| format!(r#"<jmx_eb:WindSpeed type="風速" unit="m/s">{}</jmx_eb:WindSpeed>"#, ms))
        .unwrap_or_default();
    format!(
        r#"<ProbabilityCircle type="予報円">
        {speed}
{axes}
      </ProbabilityCircle>"#,
        speed = speed,
        axes = axes_xml(axes),
    )
}

pub fn axes_xml(axes: &[AxisSpec<'_>]) -> String {
    let entries: Vec<String> = axes
        .iter()
        .map(|(direction, radius)| {
            let direction = if direction.is_empty() {
                r#"<jmx_eb:Direction type="方向" unit="8方位漢字" condition="全域"/>"#.to_string()
            } else {
                format!(
                    r#"<jmx_eb:Direction type="方向" unit="8方位漢字">{}</jmx_eb:Direction>"#,
                    direction
                )
            };
            format!(
                r#"<jmx_eb:Axis>
              {direction}
              <jmx_eb:Radius type="半径" unit="海里">0</jmx_eb:Radius>
              <jmx_eb:Radius type="半径" unit="km">{radius}</jmx_eb:Radius>
            </jmx_eb:Axis>"#,
                direction = direction,
                radius = radius,
            )
        })
        .collect();
    format!("<jmx_eb:Axes>{}</jmx_eb:Axes>", entries.join("\n"))
}

/// Parse a fixture, panicking on malformed XML
pub fn document(xml: &str) -> Document {
    Document::parse(xml).expect("fixture XML is well-formed")
}
